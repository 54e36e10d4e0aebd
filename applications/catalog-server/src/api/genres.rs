/// Genre pages
///
/// Every handler ends in either a rendered view or a redirect. Missing genres
/// on the detail and update pages surface as `ServerError::NotFound`, which
/// the shared error responder turns into a 404 page.
use crate::{
    error::{Result, ServerError},
    response::Outcome,
    state::AppState,
    views::{View, GENRE_LIST_URL},
};
use axum::{
    extract::{Path, State},
    Form,
};
use catalog_core::{
    validation::{validate_name, NameValidation},
    CatalogError, CatalogStore, CreateGenre, Genre, GenreId,
};
use serde::Deserialize;

pub const CREATE_NAME_MESSAGE: &str = "Genre must contain at least 3 characters";
pub const UPDATE_NAME_MESSAGE: &str = "The genre name must be at least 3 letters";

#[derive(Debug, Default, Deserialize)]
pub struct GenreForm {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteGenreForm {
    #[serde(default)]
    pub genreid: String,
}

/// GET /catalog/genres
pub async fn genre_list<S: CatalogStore>(State(state): State<AppState<S>>) -> Result<Outcome> {
    let genres = state.store.list_genres().await?;
    Ok(View::GenreList { genres }.into())
}

/// GET /catalog/genre/:id
pub async fn genre_detail<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Outcome> {
    let id = GenreId::new(id);
    let (genre, books) = tokio::try_join!(
        state.store.get_genre(&id),
        state.store.get_books_by_genre(&id)
    )?;

    let genre = genre.ok_or_else(|| ServerError::NotFound("Genre not found".to_string()))?;

    Ok(View::GenreDetail { genre, books }.into())
}

/// GET /catalog/genre/create
pub async fn genre_create_get() -> Outcome {
    View::GenreForm {
        title: "Create Genre",
        name: None,
        errors: Vec::new(),
    }
    .into()
}

/// POST /catalog/genre/create
pub async fn genre_create_post<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Form(form): Form<GenreForm>,
) -> Result<Outcome> {
    let name = match validate_name(&form.name, CREATE_NAME_MESSAGE) {
        NameValidation::Valid(name) => name,
        NameValidation::Invalid { name, errors } => {
            return Ok(View::GenreForm {
                title: "Create genre",
                name: Some(name),
                errors,
            }
            .into());
        }
    };

    if let Some(existing) = state.store.find_genre_by_name(&name).await? {
        tracing::debug!(genre_id = %existing.id, "Genre already exists, redirecting");
        return Ok(Outcome::redirect(existing.url()));
    }

    let genre = match state.store.create_genre(CreateGenre { name: name.clone() }).await {
        Ok(genre) => genre,
        // Lost a race against an equal name; the other insert wins
        Err(CatalogError::Duplicate(_)) => existing_genre(state.store.as_ref(), &name).await?,
        Err(e) => return Err(e.into()),
    };

    tracing::info!(genre_id = %genre.id, name = %genre.name, "Created genre");
    Ok(Outcome::redirect(genre.url()))
}

/// GET /catalog/genre/:id/delete
pub async fn genre_delete_get<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Outcome> {
    let id = GenreId::new(id);
    let (genre, books) = tokio::try_join!(
        state.store.get_genre(&id),
        state.store.get_books_by_genre(&id)
    )?;

    match genre {
        Some(genre) => Ok(View::GenreDelete { genre, books }.into()),
        None => Ok(Outcome::redirect(GENRE_LIST_URL)),
    }
}

/// POST /catalog/genre/:id/delete
pub async fn genre_delete_post<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Form(form): Form<DeleteGenreForm>,
) -> Result<Outcome> {
    let id = GenreId::new(id);
    if form.genreid != id.as_str() {
        return Err(ServerError::BadRequest(
            "Submitted genre does not match the requested genre".to_string(),
        ));
    }

    let (genre, books) = tokio::try_join!(
        state.store.get_genre(&id),
        state.store.get_books_by_genre(&id)
    )?;

    let Some(genre) = genre else {
        return Ok(Outcome::redirect(GENRE_LIST_URL));
    };

    if !books.is_empty() {
        tracing::warn!(
            genre_id = %genre.id,
            books = books.len(),
            "Refusing to delete genre with books"
        );
        return Ok(View::GenreDelete { genre, books }.into());
    }

    match state.store.delete_genre(&genre.id).await {
        Ok(_) => {
            tracing::info!(genre_id = %genre.id, "Deleted genre");
            Ok(Outcome::redirect(GENRE_LIST_URL))
        }
        // A book was filed under the genre after the check above
        Err(CatalogError::Referenced { .. }) => {
            let books = state.store.get_books_by_genre(&genre.id).await?;
            Ok(View::GenreDelete { genre, books }.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /catalog/genre/:id/update
pub async fn genre_update_get<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<Outcome> {
    let genre = state
        .store
        .get_genre(&GenreId::new(id))
        .await?
        .ok_or_else(|| ServerError::NotFound("No Genre found".to_string()))?;

    Ok(View::GenreForm {
        title: "Update Genre",
        name: Some(genre.name),
        errors: Vec::new(),
    }
    .into())
}

/// POST /catalog/genre/:id/update
///
/// Renames the genre in place; its identifier and URL never change.
pub async fn genre_update_post<S: CatalogStore>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    Form(form): Form<GenreForm>,
) -> Result<Outcome> {
    let name = match validate_name(&form.name, UPDATE_NAME_MESSAGE) {
        NameValidation::Valid(name) => name,
        NameValidation::Invalid { name, errors } => {
            return Ok(View::GenreForm {
                title: "Update genre",
                name: Some(name),
                errors,
            }
            .into());
        }
    };

    let id = GenreId::new(id);

    // A collation-equal match on this same genre is a case or accent fix
    if let Some(existing) = state.store.find_genre_by_name(&name).await? {
        if existing.id != id {
            tracing::debug!(genre_id = %existing.id, "Genre name taken, redirecting");
            return Ok(Outcome::redirect(existing.url()));
        }
    }

    let genre = state
        .store
        .get_genre(&id)
        .await?
        .ok_or_else(|| ServerError::NotFound("No Genre found".to_string()))?;

    let genre = match state.store.update_genre_name(&genre.id, &name).await {
        Ok(genre) => genre,
        Err(CatalogError::Duplicate(_)) => existing_genre(state.store.as_ref(), &name).await?,
        Err(CatalogError::NotFound { .. }) => {
            return Err(ServerError::NotFound("No Genre found".to_string()))
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(genre_id = %genre.id, name = %genre.name, "Updated genre");
    Ok(Outcome::redirect(genre.url()))
}

/// Look up the genre that caused a unique-name conflict
async fn existing_genre<S: CatalogStore>(store: &S, name: &str) -> Result<Genre> {
    store.find_genre_by_name(name).await?.ok_or_else(|| {
        ServerError::Internal(format!("Genre name '{}' conflicted but no match found", name))
    })
}
