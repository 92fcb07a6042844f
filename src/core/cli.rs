use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub reservations_path: PathBuf,
    pub logs_dir: PathBuf,
    pub user_id: String,
}

impl CliArgs {
    pub fn from_env() -> Result<Self, String> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        let mut parsed = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => parsed.config_path = Self::next_value(&mut args, "--config")?.into(),
                "--reservations" => {
                    parsed.reservations_path =
                        Self::next_value(&mut args, "--reservations")?.into();
                }
                "--logs" => parsed.logs_dir = Self::next_value(&mut args, "--logs")?.into(),
                "--user" => parsed.user_id = Self::next_value(&mut args, "--user")?,
                _ => return Err(format!("Unknown argument: {arg}")),
            }
        }
        Ok(parsed)
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String, String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .filter(|v| !v.starts_with("--"))
            .ok_or_else(|| format!("Missing value for {flag}"))
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("facility.json"),
            reservations_path: PathBuf::from("reservations.json"),
            logs_dir: PathBuf::from("logs"),
            user_id: "guest".to_string(),
        }
    }
}
