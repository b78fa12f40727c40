//! The Artikel quiz state machine.
//!
//! A [`Quiz`] loads a level's dictionary into a pool, samples rounds from it,
//! scores answers, and chains retry rounds over the missed words until a round
//! is perfect.
//!
//! # States
//!
//! ```text
//!            select_level
//!   Idle ───────────────▶ Loading ──▶ Ready ◀──────────────┐
//!                            │          │                  │
//!                            ▼          │ start_session    │ return_to_start
//!                         Failed ───────┤                  │
//!                                       ▼                  │
//!                               InSession ──advance──▶ Finished
//!                                   ▲                      │
//!                                   └─practice_failed_words┘
//! ```
//!
//! The machine never schedules anything itself. A front-end decides when to
//! call [`Quiz::advance`] after showing feedback.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod machine;
pub mod result;
pub mod sampler;
pub mod session;
pub mod state;

pub use machine::{Pool, Quiz, clamp_count};
pub use result::QuizResult;
pub use sampler::{Sampler, SeededSampler};
pub use session::{AnswerFeedback, Session, Step};
pub use state::QuizState;
