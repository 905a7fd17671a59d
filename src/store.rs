use anyhow::Context;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set, Unchanged,
};

use crate::{
    entities::movie,
    error::AppResult,
    models::{Movie, NewMovie},
};

/// Persistence layer for movie records. Ids are assigned here, never by the
/// caller.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies ordered by title ascending.
    pub async fn list(&self) -> AppResult<Vec<Movie>> {
        let rows = movie::Entity::find()
            .order_by_asc(movie::Column::Title)
            .all(&self.db)
            .await?;

        rows.into_iter().map(decode).collect()
    }

    pub async fn get(&self, id: &str) -> AppResult<Option<Movie>> {
        let row = movie::Entity::find_by_id(id.to_string()).one(&self.db).await?;
        row.map(decode).transpose()
    }

    pub async fn insert(&self, new: NewMovie) -> AppResult<Movie> {
        let id = uuid::Uuid::new_v4().to_string();
        let model = movie::ActiveModel {
            id: Set(id),
            title: Set(new.title),
            release_year: Set(new.release_year),
            actors: Set(encode_actors(&new.actors)?),
        };

        let stored = model.insert(&self.db).await?;
        decode(stored)
    }

    /// Full-record replace; the id never changes. Fails with a database error
    /// if the row does not exist, so callers wanting a not-found outcome
    /// check existence first.
    pub async fn update(&self, id: &str, new: NewMovie) -> AppResult<Movie> {
        let model = movie::ActiveModel {
            id: Unchanged(id.to_string()),
            title: Set(new.title),
            release_year: Set(new.release_year),
            actors: Set(encode_actors(&new.actors)?),
        };

        let stored = model.update(&self.db).await?;
        decode(stored)
    }

    /// Hard delete; a vanished row is not an error here.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        movie::Entity::delete_by_id(id.to_string()).exec(&self.db).await?;
        Ok(())
    }
}

fn encode_actors(actors: &[String]) -> AppResult<String> {
    Ok(serde_json::to_string(actors).context("encoding actors")?)
}

fn decode(row: movie::Model) -> AppResult<Movie> {
    let actors: Vec<String> =
        serde_json::from_str(&row.actors).context("decoding actors column")?;

    Ok(Movie {
        id: row.id,
        title: row.title,
        release_year: row.release_year,
        actors,
    })
}
