//! Placeholder résumé the builder starts from, also used for bulk previews.

use crate::models::resume::{
    default_section_order, EducationEntry, PersonalInfo, ReferenceEntry, ResumeSnapshot,
    WorkExperienceEntry,
};

impl ResumeSnapshot {
    /// A fully populated sample: every section has content and the default order.
    pub fn sample() -> Self {
        Self {
            personal_info: PersonalInfo {
                full_name: "John Doe".to_string(),
                email: "john.doe@example.com".to_string(),
                phone: "+1 234 567 890".to_string(),
                address: "New York, USA".to_string(),
                linkedin: "linkedin.com/in/johndoe".to_string(),
                github: "github.com/johndoe".to_string(),
                professional_title: "Senior Software Engineer".to_string(),
                summary: "Experienced software engineer with a passion for building scalable \
                          web applications. Proven track record of delivering high-quality code \
                          and leading teams across the full product lifecycle."
                    .to_string(),
                skills: "Languages: Rust, TypeScript, Python, SQL\n\
                         Platforms: AWS, Docker, Kubernetes, PostgreSQL"
                    .to_string(),
                certifications: "AWS Certified Solutions Architect\n\
                                 Meta Frontend Developer Professional Certificate"
                    .to_string(),
                photo: None,
            },
            work_experience: vec![
                WorkExperienceEntry {
                    job_title: "Senior Developer".to_string(),
                    company: "Tech Solutions Inc.".to_string(),
                    start_date: "2020".to_string(),
                    end_date: "Present".to_string(),
                    description: "• Led a team of 5 developers delivering the billing platform\n\
                                  • Architected microservices handling 2M requests per day\n\
                                  • Cut deployment time from hours to minutes with CI/CD"
                        .to_string(),
                },
                WorkExperienceEntry {
                    job_title: "Web Developer".to_string(),
                    company: "StartUp Co".to_string(),
                    start_date: "2018".to_string(),
                    end_date: "2020".to_string(),
                    description: "• Built the main product dashboard\n\
                                  • Optimized page load performance by 40%"
                        .to_string(),
                },
                WorkExperienceEntry {
                    job_title: "Software Engineering Intern".to_string(),
                    company: "Data Corp".to_string(),
                    start_date: "2017".to_string(),
                    end_date: "2018".to_string(),
                    description: "• Wrote ETL jobs for the analytics warehouse".to_string(),
                },
                WorkExperienceEntry {
                    job_title: "Teaching Assistant".to_string(),
                    company: "Tech University".to_string(),
                    start_date: "2016".to_string(),
                    end_date: "2017".to_string(),
                    description: "• Ran weekly lab sessions for Intro to Programming".to_string(),
                },
            ],
            education: vec![
                EducationEntry {
                    degree: "BS Computer Science".to_string(),
                    institution: "Tech University".to_string(),
                    year: "2014 - 2018".to_string(),
                    description: "Graduated with Honors".to_string(),
                },
                EducationEntry {
                    degree: "Project Management (Online)".to_string(),
                    institution: "Open Learning Institute".to_string(),
                    year: "2020".to_string(),
                    description: "• Managing technical projects\n\
                                  • Monitoring project performance against objectives"
                        .to_string(),
                },
                EducationEntry {
                    degree: "Product Design Bootcamp".to_string(),
                    institution: "Design Academy".to_string(),
                    year: "2019".to_string(),
                    description: String::new(),
                },
                EducationEntry {
                    degree: "Diploma in English Language".to_string(),
                    institution: "City Language School".to_string(),
                    year: "2013 - 2014".to_string(),
                    description: String::new(),
                },
            ],
            references: vec![
                ReferenceEntry {
                    name: "Jane Smith".to_string(),
                    contact: "jane.smith@example.com, Engineering Manager, Tech Solutions"
                        .to_string(),
                },
                ReferenceEntry {
                    name: "Alex Johnson".to_string(),
                    contact: "alex.j@example.com, CTO at StartUp Co".to_string(),
                },
            ],
            section_order: default_section_order(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ResumeSnapshot, SectionKind, TextList};

    #[test]
    fn test_sample_has_every_section_populated() {
        let sample = ResumeSnapshot::sample();
        assert!(sample.missing_required_fields().is_empty());
        assert_eq!(sample.work_experience.len(), 4);
        assert_eq!(sample.education.len(), 4);
        assert_eq!(sample.references.len(), 2);
        assert!(!TextList::parse(&sample.personal_info.skills).is_empty());
        assert!(!TextList::parse(&sample.personal_info.certifications).is_empty());
        let kinds: Vec<SectionKind> = sample.section_order.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, SectionKind::ALL.to_vec());
    }
}
