use super::use_planner_host::use_planner_host;
use crate::services::file_reader::read_all_as_data_urls;
use planner_backend::PhotoService;
use shared::Photo;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct PhotosState {
    pub photos: Vec<Photo>,
    /// A batch is being decoded; the list is not touched until it completes
    pub decoding: bool,
}

#[derive(Clone, PartialEq)]
pub struct UsePhotosActions {
    pub add_files: Callback<Vec<web_sys::File>>,
    pub remove_photo: Callback<String>,
}

pub struct UsePhotosResult {
    pub state: PhotosState,
    pub actions: UsePhotosActions,
}

#[hook]
pub fn use_photos() -> UsePhotosResult {
    let host = use_planner_host();
    let service = use_mut_ref(move || PhotoService::load(host.store.clone(), &host.config));
    let pending_batches = use_mut_ref(|| 0u32);
    let force_update = use_force_update();

    let add_files = {
        let service = service.clone();
        let pending_batches = pending_batches.clone();
        let force_update = force_update.clone();
        Callback::from(move |files: Vec<web_sys::File>| {
            if files.is_empty() {
                return;
            }
            let service = service.clone();
            let pending_batches = pending_batches.clone();
            let force_update = force_update.clone();

            *pending_batches.borrow_mut() += 1;
            force_update.force_update();
            let selected = files.len();
            spawn_local(async move {
                let images = read_all_as_data_urls(files).await;
                let added = service.borrow_mut().add_batch(images);
                if added < selected {
                    log::warn!("Added {} of {} selected photo(s)", added, selected);
                }
                {
                    let mut pending = pending_batches.borrow_mut();
                    *pending = pending.saturating_sub(1);
                }
                force_update.force_update();
            });
        })
    };

    let remove_photo = {
        let service = service.clone();
        Callback::from(move |id: String| {
            if service.borrow_mut().remove_photo(&id) {
                force_update.force_update();
            }
        })
    };

    let state = PhotosState {
        photos: service.borrow().photos().to_vec(),
        decoding: *pending_batches.borrow() > 0,
    };

    UsePhotosResult {
        state,
        actions: UsePhotosActions { add_files, remove_photo },
    }
}
