mod candidate;
mod step;

pub use candidate::Candidate;
pub use step::InterviewStep;
