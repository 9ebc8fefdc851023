//! Quizzes for the statlab lessons.
//!
//! - [`quiz`]: quiz definitions, validation and the built-in quiz bank
//! - [`scoring`]: pure scoring of a learner's selections
//!
//! Quizzes deserialize from JSON, so a quiz file can replace the built-in bank:
//!
//! ```
//! use statlab_quiz::quiz::Quiz;
//!
//! let json = r#"{
//!     "id": "mini",
//!     "title": "Mini quiz",
//!     "questions": [{
//!         "id": "m1",
//!         "prompt": "Mean of 2, 4, 6?",
//!         "choices": [{"value": "a", "label": "4"}, {"value": "b", "label": "6"}],
//!         "answer": "a"
//!     }]
//! }"#;
//! let quiz: Quiz = serde_json::from_str(json).unwrap();
//! assert!(quiz.validate().is_ok());
//! ```

pub mod quiz;
pub mod scoring;
