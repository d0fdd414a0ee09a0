mod caption_oracle;

pub use caption_oracle::{CaptionOracle, OracleRequest};
