use crate::generator::{BASE_ID, MAX_OFFSET};
use crate::report::error::{Error, Result};
use log::LevelFilter;
use rand::{SeedableRng, XorShiftRng};

/// Settings for a report run.
#[derive(Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Number of students in each generated tree.
    pub sizes: Vec<u32>,
    pub seed: u64,
    /// Id searched for with the comparator the trees are ordered by.
    pub probe_id: u32,
    /// Name searched for with a comparator the trees are not ordered by.
    pub probe_name: String,
    pub log_level: LevelFilter,
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            sizes: vec![100, 1000, 10000],
            seed: 1,
            probe_id: BASE_ID + 101,
            probe_name: String::from("Pedro"),
            log_level: LevelFilter::Info,
        }
    }
}

impl ReportConfig {
    /// Parses command line arguments, not including the program name, on top of the defaults.
    ///
    /// Recognized flags are `--sizes 100,200`, `--seed N`, `--probe-id N`, `--probe-name NAME`
    /// and `--log-level LEVEL`.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut config = ReportConfig::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            let value = match args.next() {
                Some(value) => value,
                None if is_flag(&arg) => return Err(Error::MissingValue(arg)),
                None => return Err(Error::UnknownArgument(arg)),
            };

            match arg.as_str() {
                "--sizes" => {
                    config.sizes = value
                        .split(',')
                        .map(str::trim)
                        .filter(|size| !size.is_empty())
                        .map(str::parse)
                        .collect::<std::result::Result<Vec<u32>, _>>()?;
                },
                "--seed" => config.seed = value.parse()?,
                "--probe-id" => config.probe_id = value.parse()?,
                "--probe-name" => config.probe_name = value,
                "--log-level" => {
                    config.log_level = value.parse().map_err(|_| Error::InvalidLogLevel(value))?;
                },
                _ => return Err(Error::UnknownArgument(arg)),
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            return Err(Error::EmptySizes);
        }
        match self.sizes.iter().find(|size| **size > MAX_OFFSET) {
            Some(size) => Err(Error::SizeTooLarge(*size)),
            None => Ok(()),
        }
    }

    /// Returns a random source that produces the same sequence for the same seed.
    pub fn rng(&self) -> XorShiftRng {
        // the last two words keep the seed from ever being all zeros
        XorShiftRng::from_seed([
            self.seed as u32,
            (self.seed >> 32) as u32,
            0x9e37_79b9,
            0x7f4a_7c15,
        ])
    }
}

fn is_flag(arg: &str) -> bool {
    match arg {
        "--sizes" | "--seed" | "--probe-id" | "--probe-name" | "--log-level" => true,
        _ => false,
    }
}
