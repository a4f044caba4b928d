pub mod document_writer;
pub mod level_cycler;
pub mod llm_service;
pub mod mark_allocator;
pub mod prompt_builder;
pub mod question_generator;
pub mod record_assembler;
pub mod response_parser;

pub use document_writer::DocumentWriter;
pub use level_cycler::assign_level;
pub use llm_service::LlmService;
pub use mark_allocator::{allocate_marks, question_count_for, resolve_max_marks};
pub use prompt_builder::build_generation_prompt;
pub use question_generator::QuestionGenerator;
pub use record_assembler::{assemble_records, reconcile_total};
pub use response_parser::parse_response;
