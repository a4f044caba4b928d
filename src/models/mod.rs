pub mod assessment;
pub mod image;
pub mod loaders;
pub mod taxonomy;

pub use assessment::{
    AllocationEntry, AssessmentDocument, MarksAllocation, Part, QuestionFragment, QuestionRecord,
};
pub use image::ImagePayload;
pub use loaders::{collect_image_paths, list_image_files};
pub use taxonomy::{BloomLevel, BLOOM_LEVELS};
