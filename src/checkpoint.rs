use std::fs::File;
use std::path::Path;

use log::info;

use crate::error::{Result, ScrapeError};
use crate::record::{JobDetails, JobRecord};

/// Writes the listing columns of `records` to `path`, replacing any old file.
pub fn write_initial(path: &Path, records: &[JobRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(JobRecord::COLUMNS)?;
    for record in records {
        writer.write_record(record.values())?;
    }
    writer.flush()?;
    info!("Initial data for {} jobs saved to {:?}", records.len(), path);
    Ok(())
}

/// Loads the listing checkpoint. The header must be exactly the listing
/// columns in order.
pub fn read_initial(path: &Path) -> Result<Vec<JobRecord>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let headers = reader.headers()?;
    if !headers.iter().eq(JobRecord::COLUMNS) {
        return Err(ScrapeError::CheckpointSchema {
            path: path.to_path_buf(),
            found: headers.iter().map(str::to_string).collect(),
        });
    }

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: JobRecord = result?;
        records.push(record);
    }
    info!("Loaded {} jobs from {:?}", records.len(), path);
    Ok(records)
}

/// Writes listing and detail columns. Records that were never enriched get
/// sentinel detail values so every row has the full width.
pub fn write_detailed(path: &Path, records: &[JobRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(JobRecord::COLUMNS.iter().chain(JobDetails::COLUMNS.iter()))?;

    let missing = JobDetails::not_available();
    for record in records {
        let details = record.details.as_ref().unwrap_or(&missing);
        writer.write_record(record.values().iter().chain(details.values().iter()))?;
    }
    writer.flush()?;
    info!("Detailed data for {} jobs saved to {:?}", records.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NOT_AVAILABLE;
    use std::fs;
    use std::path::PathBuf;

    fn tmp_file(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push("job_scraper_checkpoint");
        fs::create_dir_all(&dir).unwrap();
        dir.push(name);
        let _ = fs::remove_file(&dir);
        dir
    }

    fn job(n: usize) -> JobRecord {
        JobRecord {
            company_name: format!("Company {n}"),
            job_title: "Data Scientist, \"ML\"".into(),
            job_url: format!("https://www.mycareersfuture.gov.sg/job/{n}"),
            location: "Central".into(),
            employment_type: "Full Time".into(),
            seniority: "Executive".into(),
            category: "Information Technology".into(),
            skills_matched: NOT_AVAILABLE.into(),
            applications: "4 applications".into(),
            posting_date: "Posted today".into(),
            salary_range: "$5,000 to $7,000".into(),
            salary_type: "Monthly".into(),
            logo_url: NOT_AVAILABLE.into(),
            details: None,
        }
    }

    #[test]
    fn initial_checkpoint_reloads() {
        let path = tmp_file("initial.csv");
        let jobs = vec![job(1), job(2)];
        write_initial(&path, &jobs).unwrap();

        let loaded = read_initial(&path).unwrap();
        assert_eq!(loaded, jobs);

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("Company Name,Job Title,Job URL,Location,"));
    }

    #[test]
    fn unexpected_header_is_rejected() {
        let path = tmp_file("bad_header.csv");
        fs::write(&path, "Company Name,Job Title\nAcme,Analyst\n").unwrap();

        match read_initial(&path) {
            Err(ScrapeError::CheckpointSchema { found, .. }) => {
                assert_eq!(found, vec!["Company Name", "Job Title"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn detailed_checkpoint_has_all_columns() {
        let path = tmp_file("detailed.csv");
        let mut enriched = job(1);
        enriched.details = Some(JobDetails {
            job_id: "MCF-1".into(),
            categories: "Engineering | Sciences".into(),
            ..JobDetails::not_available()
        });
        write_detailed(&path, &[enriched, job(2)]).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        assert_eq!(reader.headers().unwrap().len(), 23);
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][13], "MCF-1");
        assert_eq!(&rows[0][17], "Engineering | Sciences");
        assert_eq!(&rows[1][13], NOT_AVAILABLE);
    }
}
