/// The type to represent idkey results.
pub type IdkeyResult<T = ()> = anyhow::Result<T>;
