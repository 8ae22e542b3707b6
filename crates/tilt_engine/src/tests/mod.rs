//! Cross-module tests driving the engine the way a game loop does

mod frame_loop;
