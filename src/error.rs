use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("cannot convert '{token}' to {target}")]
    Convert { token: String, target: &'static str },

    #[error("no trade data loaded, check the input file")]
    EmptyData,
}
