pub mod resume;
pub mod sample;

pub use resume::{
    default_section_order, EducationEntry, PersonalInfo, ReferenceEntry, ResumeSnapshot,
    SectionDescriptor, SectionKind, TextList, WorkExperienceEntry,
};
