//! Interactive play
//!
//! Feedback entry and the prompt loop that drives a solver session.

mod feedback_line;
mod session;

pub use feedback_line::{FeedbackLine, KeyInput, LineEvent, LineInput};
pub use session::{run_line_session, run_play};
