//! Decoding selected image files into data URIs.

use futures::future::join_all;
use gloo::file::futures::read_as_data_url;
use web_sys::FileList;

pub fn files_from_list(list: &FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

/// Decode every file concurrently and resolve once all of them have settled.
///
/// Output keeps the input order. Files that cannot be read are logged and
/// left out rather than holding up the rest of the batch.
pub async fn read_all_as_data_urls(files: Vec<web_sys::File>) -> Vec<String> {
    let reads = files.into_iter().map(|file| async move {
        let name = file.name();
        let file = gloo::file::File::from(file);
        match read_as_data_url(&file).await {
            Ok(data_url) => Some(data_url),
            Err(e) => {
                log::warn!("Could not read '{}': {}", name, e);
                None
            }
        }
    });

    join_all(reads).await.into_iter().flatten().collect()
}
