//! Built-in sample dataset
//!
//! Served when the configured data source cannot produce any records and
//! fallback is allowed. Five curated papers followed by 25 generated ones,
//! enough to exercise pagination at the default page size. Generated dates
//! are derived from the index so the dataset is identical on every run.

use chrono::NaiveDate;

use super::record::Record;

const CURATED: usize = 5;
const GENERATED: usize = 25;

const PMC_GENOMICS: &str = "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC4136787/";
const PMC_PHYSIOLOGY: &str = "https://www.ncbi.nlm.nih.gov/pmc/articles/PMC3630201/";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn sample_id(n: usize) -> String {
    format!("sample-{:03}", n)
}

/// Returns the fixed sample dataset (30 records, ids `sample-001`..`sample-030`)
pub fn sample_records() -> Vec<Record> {
    let mut records = vec![
        Record::new(
            sample_id(1),
            "Genomic Adaptation of Microbes to the International Space Station Environment",
            date(2024, 8, 15),
        )
        .with_link(PMC_GENOMICS)
        .with_keywords(["Microgravity", "Genomics", "ISS", "Adaptation", "Microbes"])
        .with_authors(["Dr. Elena Petrov", "Dr. Kenji Tanaka", "Dr. Sarah Wilson"])
        .with_publication("Journal of Astrobiology")
        .with_abstract(
            "A comprehensive study of microbial communities aboard the ISS, identifying key genetic \
             markers for survival in microgravity and elevated radiation environments. This research \
             provides crucial insights for long-duration space missions.",
        ),
        Record::new(
            sample_id(2),
            "The Effects of Long-Duration Spaceflight on Human Cardiovascular Health",
            date(2024, 3, 15),
        )
        .with_link(PMC_PHYSIOLOGY)
        .with_keywords(["Cardiovascular", "Astronaut Health", "Long-Duration", "Countermeasures", "Space Medicine"])
        .with_authors(["Dr. Maria Gonzalez", "Dr. Richard Chen", "Dr. Ben Carter"])
        .with_publication("Space Medicine Review")
        .with_abstract(
            "This paper analyzes cardiovascular deconditioning in astronauts after 6+ month missions, \
             proposing novel countermeasures using artificial gravity and advanced exercise protocols.",
        ),
        Record::new(
            sample_id(3),
            "Closed-Loop Algae-Based Life Support Systems for Martian Habitats",
            date(2024, 2, 10),
        )
        .with_link(PMC_GENOMICS)
        .with_keywords(["Algae", "Bioreactor", "Mars", "Life Support", "Sustainability"])
        .with_authors(["Dr. Aisha Khan", "Dr. James Morrison"])
        .with_publication("Life Support & Space Habitation")
        .with_abstract(
            "Development and testing of a bioregenerative life support system using Chlorella vulgaris \
             to produce oxygen and biomass from waste materials for sustainable Mars habitation.",
        ),
        Record::new(
            sample_id(4),
            "DNA Repair Mechanisms Under Simulated Solar Particle Event Conditions",
            date(2023, 9, 5),
        )
        .with_link(PMC_PHYSIOLOGY)
        .with_keywords(["DNA Repair", "Radiation", "Solar Particle Event", "Genetics", "Cell Biology"])
        .with_authors(["Dr. Ben Carter", "Dr. Sofia Rossi", "Dr. Liu Wei"])
        .with_publication("Radiation Research")
        .with_abstract(
            "Investigating the efficacy of cellular DNA repair pathways in human cell cultures exposed \
             to proton radiation mimicking a solar particle event during deep space missions.",
        ),
        Record::new(
            sample_id(5),
            "Biomarker Signatures for Extant Life on Enceladus Plumes",
            date(2024, 6, 30),
        )
        .with_link(PMC_GENOMICS)
        .with_keywords(["Enceladus", "Biomarkers", "Ocean Worlds", "Plumes", "Astrobiology"])
        .with_authors(["Dr. Jian Li", "Dr. Eva Rostova", "Dr. Michael Torres"])
        .with_publication("Journal of Exobiology")
        .with_abstract(
            "A theoretical model outlining potential organic biomarkers that could be detected in the \
             cryovolcanic plumes of Enceladus if a subsurface biosphere exists.",
        ),
    ];

    records.extend((0..GENERATED).map(generated_record));
    records
}

fn generated_record(i: usize) -> Record {
    let n = i + CURATED + 1;
    let offset = i as u8;
    let year = 2020 + (i % 4) as i32;
    let month = (i * 5 % 12) as u32 + 1;
    let day = (i * 7 % 28) as u32 + 1;

    Record::new(
        sample_id(n),
        format!("Sample Research Paper {}: Advanced Space Biology Studies", n),
        date(year, month, day),
    )
    .with_link(PMC_GENOMICS)
    .with_keywords(["Space Biology", "Research", "NASA", "Microgravity", "Experiments"])
    .with_authors([
        format!("Dr. Researcher {}", char::from(b'A' + offset)),
        format!("Dr. Scientist {}", char::from(b'Z' - offset)),
    ])
    .with_publication(format!("Science Journal {}", i % 3 + 1))
    .with_abstract(format!(
        "This is a sample research paper abstract for testing purposes. Paper {} demonstrates \
         various aspects of space biology and microgravity research. The study provides valuable \
         insights into biological processes in space environments.",
        n
    ))
}
