use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostError {
    #[error("No gross returns or turnover assumption registered for strategy '{0}'")]
    UnknownStrategy(String),
}
