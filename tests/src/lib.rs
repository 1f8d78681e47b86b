#[cfg(test)]
mod recon;
