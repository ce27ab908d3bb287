//! Whole-file JSON reads and durable writes

use std::{
	path::{Path, PathBuf},
	sync::atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tokio::{
	fs::{File, remove_file, rename},
	io::AsyncWriteExt,
};

use techascend::prelude::*;

static TMP_SEQ: AtomicU64 = AtomicU64::new(0);

/// Id high-water marks, kept so deleted ids are never handed out again
#[derive(Debug, Default, Serialize, Deserialize)]
pub(crate) struct Counters {
	#[serde(default)]
	pub event: i64,
	#[serde(default)]
	pub registration: i64,
}

fn tmp_file_path(path: &Path) -> PathBuf {
	let seq = TMP_SEQ.fetch_add(1, Ordering::Relaxed);
	let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
	path.with_file_name(format!(".{}.tmp-{}-{}", name, std::process::id(), seq))
}

/// Reads and parses a JSON file. A missing file reads as `None`.
pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> ClResult<Option<T>> {
	let buf = match tokio::fs::read(path).await {
		Ok(buf) => buf,
		Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
		Err(err) => {
			warn!(path = %path.display(), "read failed: {}", err);
			return Err(err.into());
		}
	};

	serde_json::from_slice(&buf)
		.map(Some)
		.inspect_err(|err| warn!(path = %path.display(), "corrupt JSON file: {}", err))
		.map_err(|_| Error::DbError)
}

/// Replaces a JSON file atomically (temp file, fsync, rename)
pub(crate) async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> ClResult<()> {
	let data = serde_json::to_vec_pretty(value)?;
	let tmp_path = tmp_file_path(path);

	let res = async {
		let mut file = File::create(&tmp_path).await?;
		file.write_all(&data).await?;
		file.sync_all().await?;
		rename(&tmp_path, path).await?;
		Ok::<(), Error>(())
	}
	.await;

	if let Err(err) = res {
		warn!(path = %path.display(), "write failed, removing tmpfile: {}", err);
		let _ = remove_file(&tmp_path).await;
		return Err(err);
	}
	debug!(path = %path.display(), bytes = data.len(), "written");

	Ok(())
}


// vim: ts=4
