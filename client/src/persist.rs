use std::path::Path;

use byteorder::{LittleEndian, WriteBytesExt};
use tokio::io::AsyncWriteExt;

/// Writes `numbers` to `path` as a little-endian `u64` count followed by
/// that many little-endian `f64` values, per §4.6/§6.
pub async fn write_sequence(path: &Path, numbers: &[f64]) -> std::io::Result<()> {
    let mut buffer = Vec::with_capacity(8 + numbers.len() * 8);
    buffer.write_u64::<LittleEndian>(numbers.len() as u64)?;
    for &number in numbers {
        buffer.write_f64::<LittleEndian>(number)?;
    }

    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(&buffer).await?;
    file.flush().await?;
    Ok(())
}
