mod scripted_oracle;

pub use scripted_oracle::ScriptedOracle;
