use crate::cli::InspectArgs;
use crate::inspector::{build_sample_report, InspectorReport, SampleParams};
use crate::utils::{InspectorError, Result};
use rayon::{
    iter::{IntoParallelRefIterator, ParallelIterator},
    ThreadPoolBuilder,
};
use std::time;

pub fn inspect(args: InspectArgs) -> Result<()> {
    let start_timer = time::Instant::now();

    let params = SampleParams {
        max_entries: args.max_entries,
        skip_invalid_rows: args.skip_invalid_rows,
    };

    log::debug!(
        "Initializing thread pool with {} threads...",
        args.num_threads
    );
    let pool = initialize_thread_pool(args.num_threads)?;

    // Samples are independent; results come back in input order and are
    // merged into the report on this thread only.
    let results: Vec<_> = pool.install(|| {
        args.input_files
            .par_iter()
            .map(|descriptor| build_sample_report(descriptor, &params))
            .collect()
    });

    let mut report = InspectorReport::default();
    for (descriptor, result) in args.input_files.iter().zip(results) {
        match result {
            Ok(sample) => {
                log::info!(
                    "Sample {}: TP={} FP={} FN={}",
                    sample.sample_name,
                    sample.true_positives.len(),
                    sample.false_positives.len(),
                    sample.false_negatives.len()
                );
                if report.insert(sample).is_some() {
                    log::warn!(
                        "Sample {} was given more than once, keeping the last descriptor",
                        descriptor.sample_name
                    );
                }
            }
            Err(InspectorError::MissingInputFile(path)) => log::warn!(
                "The input file {} does not exist. Skipping sample {}.",
                path.display(),
                descriptor.sample_name
            ),
            Err(e) => log::error!("Skipping sample {}: {}", descriptor.sample_name, e),
        }
    }

    report.write_json(&args.output_path)?;
    log::info!(
        "Wrote {} of {} samples to {}",
        report.len(),
        args.input_files.len(),
        args.output_path.display()
    );
    log::info!("Total execution time: {:.2?}", start_timer.elapsed());
    Ok(())
}

fn initialize_thread_pool(num_threads: usize) -> Result<rayon::ThreadPool> {
    ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .thread_name(|i| format!("inspector-{}", i))
        .build()
        .map_err(|e| {
            InspectorError::InvalidArgument(format!("Failed to initialize thread pool: {}", e))
        })
}
