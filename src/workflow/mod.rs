pub mod synthesis_flow;
pub mod synthesis_request;

pub use synthesis_flow::SynthesisFlow;
pub use synthesis_request::SynthesisRequest;
