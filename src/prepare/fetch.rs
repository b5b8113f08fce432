//! Dataset download and decompression

use crate::error::{Error, Result};
use bzip2::read::BzDecoder;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::DatasetSource;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
// Some of the benchmark archives are tens of megabytes on a slow mirror.
const READ_TIMEOUT: Duration = Duration::from_secs(600);

/// Build the HTTP agent used for dataset downloads.
fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout_connect(CONNECT_TIMEOUT)
        .timeout_read(READ_TIMEOUT)
        .build()
}

/// Download every registered dataset that is not already present in
/// `data_dir`. Sources ending in `.bz2` are decompressed in place; the final
/// artifact always lands at `<data_dir>/<name>`. Progress lines are
/// suppressed when `quiet` is set.
///
/// # Errors
///
/// A failed download or decompression aborts the run; nothing is retried.
pub fn fetch_missing(data_dir: &Path, sources: &[DatasetSource], quiet: bool) -> Result<()> {
    let agent = agent();

    if !quiet {
        println!("acquiring missing data");
    }
    for source in sources {
        let target = data_dir.join(source.name);
        if target.is_file() {
            if !quiet {
                println!("\t{} exists.", source.name);
            }
            continue;
        }

        if !quiet {
            println!("\tdownloading {}", source.name);
            println!("\turl: {}", source.url);
        }
        fetch_one(&agent, source, &target)?;
    }
    Ok(())
}

/// Staging name for a download: the full target file name with `.part`
/// appended, so dotted names like `news20.binary` keep their extension and
/// never collide.
pub(super) fn staging_path(target: &Path) -> PathBuf {
    match target.file_name() {
        Some(name) => {
            let mut staged = name.to_os_string();
            staged.push(".part");
            target.with_file_name(staged)
        }
        None => target.with_extension("part"),
    }
}

/// Download one source into `target`, decompressing when the URL names a
/// bz2 archive. The payload is staged next to the target and renamed into
/// place so an aborted run never satisfies the presence check.
fn fetch_one(agent: &ureq::Agent, source: &DatasetSource, target: &Path) -> Result<()> {
    let staged = staging_path(target);
    download(agent, source.url, &staged)?;

    if source.url.ends_with(".bz2") {
        decompress_bz2(&staged, target)?;
        fs::remove_file(&staged)?;
    } else {
        fs::rename(&staged, target)?;
    }
    Ok(())
}

fn download(agent: &ureq::Agent, url: &str, dest: &Path) -> Result<()> {
    let response = agent.get(url).call().map_err(|e| Error::Download {
        url: url.to_string(),
        detail: e.to_string(),
    })?;

    let mut reader = response.into_reader();
    let mut file = File::create(dest)?;
    io::copy(&mut reader, &mut file)?;
    Ok(())
}

/// Decompress a bz2 archive from `src` into `dest`.
pub fn decompress_bz2(src: &Path, dest: &Path) -> Result<()> {
    let input = File::open(src)?;
    let mut decoder = BzDecoder::new(BufReader::new(input));
    let mut out = File::create(dest)?;
    io::copy(&mut decoder, &mut out).map_err(|e| Error::Decompress {
        path: src.display().to_string(),
        detail: e.to_string(),
    })?;
    Ok(())
}
