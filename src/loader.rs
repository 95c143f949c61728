//! CSV loading for the job-market dataset
//!
//! The source file is read once into Arrow record batches and converted to
//! typed `JobRecord`s. Ordinal and boolean-like columns are validated against
//! their declared domains while loading: in strict mode an out-of-domain
//! value fails the load, in lenient mode it is logged and treated as missing.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use arrow::array::ArrayRef;
use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;

use crate::config::LoaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{JobInsightsError, Result};
use crate::models::types::{
    AiAdoptionLevel, AutomationRisk, Categorical, CompanySize, JobGrowthProjection, RemoteFriendly,
};
use crate::models::{Dataset, JobRecord};
use crate::schema::{Column, present_columns};

/// Load a job-market CSV file into a typed dataset
///
/// The file is read exactly once; callers are expected to hold on to the
/// returned `Dataset` and run all analyses against it.
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `config` - Loader configuration (header, batch size, strictness)
///
/// # Errors
/// Returns an error if the file does not exist, cannot be decoded as CSV,
/// or (in strict mode) contains categorical values outside their declared
/// domain or invalid salaries.
pub fn load_dataset(path: &Path, config: &LoaderConfig) -> Result<Dataset> {
    let mut file = safe_open_file(path, "loading job market data")?;

    let format = Format::default().with_header(config.has_header);
    let (schema, _) = format
        .infer_schema(&mut file, Some(config.schema_inference_rows))
        .with_context(|| format!("Failed to infer schema for {}", path.display()))?;
    file.rewind()?;

    let present = present_columns(&schema);

    let reader = ReaderBuilder::new(Arc::new(schema))
        .with_format(format)
        .with_batch_size(config.batch_size)
        .build(file)
        .with_context(|| format!("Failed to build CSV reader for {}", path.display()))?;

    let mut records = Vec::new();
    let mut row_offset = 0;
    for batch_result in reader {
        let batch = batch_result
            .with_context(|| format!("Failed to read record batch from {}", path.display()))?;
        extract_records(&batch, row_offset, config, &mut records)?;
        row_offset += batch.num_rows();
    }

    log::info!(
        "Loaded {} records ({} of {} expected columns) from {}",
        records.len(),
        present.len(),
        Column::ALL.len(),
        path.display()
    );

    Ok(Dataset::new(records, present))
}

/// Convert one record batch into `JobRecord`s, appending to `records`
fn extract_records(
    batch: &RecordBatch,
    row_offset: usize,
    config: &LoaderConfig,
    records: &mut Vec<JobRecord>,
) -> Result<()> {
    let schema = batch.schema();
    let column = |c: Column| -> Option<ArrayRef> {
        schema
            .index_of(c.name())
            .ok()
            .map(|idx| batch.column(idx).clone())
    };

    let job_title = column(Column::JobTitle);
    let industry = column(Column::Industry);
    let location = column(Column::Location);
    let required_skills = column(Column::RequiredSkills);
    let remote_friendly = column(Column::RemoteFriendly);
    let job_growth = column(Column::JobGrowthProjection);
    let company_size = column(Column::CompanySize);
    let ai_adoption = column(Column::AiAdoptionLevel);
    let automation_risk = column(Column::AutomationRisk);
    let salary = column(Column::SalaryUsd);

    records.reserve(batch.num_rows());
    for i in 0..batch.num_rows() {
        let row = row_offset + i;
        let record = JobRecord {
            job_title: string_at(&job_title, i),
            industry: string_at(&industry, i),
            location: string_at(&location, i),
            required_skills: string_at(&required_skills, i),
            remote_friendly: parse_categorical::<RemoteFriendly>(
                &remote_friendly,
                i,
                row,
                Column::RemoteFriendly,
                config,
            )?,
            job_growth_projection: parse_categorical::<JobGrowthProjection>(
                &job_growth,
                i,
                row,
                Column::JobGrowthProjection,
                config,
            )?,
            company_size: parse_categorical::<CompanySize>(
                &company_size,
                i,
                row,
                Column::CompanySize,
                config,
            )?,
            ai_adoption_level: parse_categorical::<AiAdoptionLevel>(
                &ai_adoption,
                i,
                row,
                Column::AiAdoptionLevel,
                config,
            )?,
            automation_risk: parse_categorical::<AutomationRisk>(
                &automation_risk,
                i,
                row,
                Column::AutomationRisk,
                config,
            )?,
            salary_usd: parse_salary(&salary, i, row, config)?,
        };
        records.push(record);
    }

    Ok(())
}

fn string_at(array: &Option<ArrayRef>, index: usize) -> Option<String> {
    array
        .as_ref()
        .and_then(|a| crate::utils::array_value_to_string(a, index))
}

/// Parse a categorical cell against its declared domain
///
/// Out-of-domain values are a validation error in strict mode; otherwise
/// they are logged and mapped to missing.
fn parse_categorical<T: Categorical>(
    array: &Option<ArrayRef>,
    index: usize,
    row: usize,
    column: Column,
    config: &LoaderConfig,
) -> Result<Option<T>> {
    let Some(raw) = string_at(array, index) else {
        return Ok(None);
    };

    match T::parse(&raw) {
        Some(value) => Ok(Some(value)),
        None if config.strict_values => Err(JobInsightsError::InvalidCategory {
            column: column.name().to_string(),
            value: raw,
            row,
        }),
        None => {
            log::warn!(
                "Value '{raw}' at row {row} is outside the domain of {}, treating as missing",
                column.name()
            );
            Ok(None)
        }
    }
}

/// Parse a salary cell, enforcing that present values are non-negative and finite
fn parse_salary(
    array: &Option<ArrayRef>,
    index: usize,
    row: usize,
    config: &LoaderConfig,
) -> Result<Option<f64>> {
    let Some(value) = array
        .as_ref()
        .and_then(|a| crate::utils::array_value_to_f64(a, index))
    else {
        return Ok(None);
    };

    if value.is_finite() && value >= 0.0 {
        Ok(Some(value))
    } else if config.strict_values {
        Err(JobInsightsError::InvalidSalary { value, row })
    } else {
        log::warn!("Invalid salary {value} at row {row}, treating as missing");
        Ok(None)
    }
}
