mod fake_source;
mod sync_job;
