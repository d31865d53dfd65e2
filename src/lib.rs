pub mod camera;
pub mod parallax;
pub mod registry;
pub mod sets;
pub mod ui;

#[cfg(test)]
mod test_helpers;
