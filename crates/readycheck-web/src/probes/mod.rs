pub mod camera;
pub mod keyboard;
pub mod microphone;
pub mod mouse;
pub mod speed;
pub mod system;
