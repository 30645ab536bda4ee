pub mod fullscreen_message;
