pub mod compositor;
pub mod line_layout;

#[cfg(test)]
mod tests;
