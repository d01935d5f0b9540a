use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use anyhow::bail;
    use clap::{Args, Parser, Subcommand};
    use vecmat::{DVec2, DVec3, DVec4, TextFormat};

    #[derive(Debug, Parser)]
    #[command(about = "Double precision vector arithmetic", long_about = None)]
    struct Cli {
        #[command(flatten)]
        format: FormatArgs,

        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Args)]
    struct FormatArgs {
        /// Separator between vector components, for both input and output
        #[arg(short, long, default_value = ", ", global = true)]
        separator: String,

        /// Number of decimals to print for each number
        #[arg(short, long, global = true)]
        precision: Option<usize>,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the Euclidean length of a vector
        Length { vector: String },
        /// Print the vector scaled to unit length
        Normalize { vector: String },
        /// Print the dot product of two vectors
        Dot { lhs: String, rhs: String },
        /// Print the cross product of two 3D vectors
        Cross { lhs: String, rhs: String },
        /// Print the distance between two points
        Distance { lhs: String, rhs: String },
        /// Print a vector as a JSON object
        ToJson { vector: String },
        /// Print a vector given as a JSON object
        FromJson { json: String },
    }

    /// A vector whose dimension is given by its number of components.
    #[derive(Clone, Copy, Debug, PartialEq)]
    enum AnyVector {
        Two(DVec2),
        Three(DVec3),
        Four(DVec4),
    }

    impl AnyVector {
        fn parse(input: &str, format: &TextFormat) -> Result<Self> {
            let vector = match input.split(format.separator.as_str()).count() {
                2 => Self::Two(DVec2::parse_with(Some(input), format)?),
                3 => Self::Three(DVec3::parse_with(Some(input), format)?),
                4 => Self::Four(DVec4::parse_with(Some(input), format)?),
                count => bail!("Expected 2, 3 or 4 components, found {count}"),
            };
            Ok(vector)
        }

        fn from_json(json: &str) -> Result<Self> {
            // Lower dimensions ignore surplus fields, so try the highest first
            if let Ok(vector) = serde_json::from_str(json) {
                return Ok(Self::Four(vector));
            }
            if let Ok(vector) = serde_json::from_str(json) {
                return Ok(Self::Three(vector));
            }
            Ok(Self::Two(serde_json::from_str(json)?))
        }

        fn to_json(&self) -> Result<String> {
            let json = match self {
                Self::Two(vector) => serde_json::to_string(vector)?,
                Self::Three(vector) => serde_json::to_string(vector)?,
                Self::Four(vector) => serde_json::to_string(vector)?,
            };
            Ok(json)
        }

        fn to_string_with(&self, format: &TextFormat) -> String {
            match self {
                Self::Two(vector) => vector.to_string_with(format),
                Self::Three(vector) => vector.to_string_with(format),
                Self::Four(vector) => vector.to_string_with(format),
            }
        }

        fn length(&self) -> f64 {
            match self {
                Self::Two(vector) => vector.length(),
                Self::Three(vector) => vector.length(),
                Self::Four(vector) => vector.length(),
            }
        }

        fn normalized(&self) -> Self {
            match self {
                Self::Two(vector) => Self::Two(vector.normalized()),
                Self::Three(vector) => Self::Three(vector.normalized()),
                Self::Four(vector) => Self::Four(vector.normalized()),
            }
        }

        fn dot(&self, other: &Self) -> Result<f64> {
            match (self, other) {
                (Self::Two(a), Self::Two(b)) => Ok(DVec2::dot(a, b)),
                (Self::Three(a), Self::Three(b)) => Ok(DVec3::dot(a, b)),
                (Self::Four(a), Self::Four(b)) => Ok(DVec4::dot(a, b)),
                _ => bail!("The vectors have different dimensions"),
            }
        }

        fn distance(&self, other: &Self) -> Result<f64> {
            match (self, other) {
                (Self::Two(a), Self::Two(b)) => Ok(DVec2::distance(a, b)),
                (Self::Three(a), Self::Three(b)) => Ok(DVec3::distance(a, b)),
                (Self::Four(a), Self::Four(b)) => Ok(DVec4::distance(a, b)),
                _ => bail!("The vectors have different dimensions"),
            }
        }
    }

    fn format_number(value: f64, format: &TextFormat) -> String {
        match format.precision {
            Some(precision) => format!("{value:.precision$}"),
            None => value.to_string(),
        }
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();
        let format = TextFormat {
            separator: cli.format.separator,
            precision: cli.format.precision,
            ..TextFormat::default()
        };
        let parse = |input: &str| AnyVector::parse(input, &format);

        let output = match cli.command {
            Command::Length { vector } => format_number(parse(&vector)?.length(), &format),
            Command::Normalize { vector } => parse(&vector)?.normalized().to_string_with(&format),
            Command::Dot { lhs, rhs } => format_number(parse(&lhs)?.dot(&parse(&rhs)?)?, &format),
            Command::Cross { lhs, rhs } => {
                let (AnyVector::Three(lhs), AnyVector::Three(rhs)) = (parse(&lhs)?, parse(&rhs)?)
                else {
                    bail!("The cross product requires two 3D vectors");
                };
                DVec3::cross(&lhs, &rhs).to_string_with(&format)
            }
            Command::Distance { lhs, rhs } => {
                format_number(parse(&lhs)?.distance(&parse(&rhs)?)?, &format)
            }
            Command::ToJson { vector } => parse(&vector)?.to_json()?,
            Command::FromJson { json } => AnyVector::from_json(&json)?.to_string_with(&format),
        };

        log::debug!("Writing {} bytes of output", output.len());
        println!("{output}");
        Ok(())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
