use crate::hooks::use_photos::use_photos;
use crate::services::file_reader::files_from_list;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[function_component(PhotoGallery)]
pub fn photo_gallery() -> Html {
    let photos = use_photos();
    let state = &photos.state;
    let actions = &photos.actions;

    let on_files_selected = {
        let add_files = actions.add_files.clone();
        Callback::from(move |e: Event| {
            let input = e.target_unchecked_into::<HtmlInputElement>();
            let files = input.files().map(|list| files_from_list(&list)).unwrap_or_default();
            // Allow picking the same files again
            input.set_value("");
            add_files.emit(files);
        })
    };

    html! {
        <section class="card photo-gallery">
            <div class="gallery-header">
                <h2>{"🖼️ Photo Gallery"}</h2>
                <label class="btn btn-primary upload-button">
                    {if state.decoding { "Reading..." } else { "Upload" }}
                    <input type="file" accept="image/*" multiple=true hidden=true onchange={on_files_selected} />
                </label>
            </div>

            {if state.photos.is_empty() {
                html! { <p class="empty-state">{"No photos yet. Upload some to get started."}</p> }
            } else {
                html! {
                    <div class="photo-grid">
                        {for state.photos.iter().map(|photo| {
                            let on_remove = {
                                let remove_photo = actions.remove_photo.clone();
                                let id = photo.id.clone();
                                Callback::from(move |_: MouseEvent| remove_photo.emit(id.clone()))
                            };
                            html! {
                                <figure key={photo.id.clone()} class="photo-item">
                                    <img src={photo.image_data.clone()} alt="" />
                                    <button type="button" class="delete-button" onclick={on_remove}>{"Delete"}</button>
                                </figure>
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}
