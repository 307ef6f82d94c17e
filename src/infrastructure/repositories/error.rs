// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_LINK_ARTICLE: &str = "article_platforms_article_id_fkey";
const CNT_LINK_PLATFORM: &str = "article_platforms_post_platform_id_fkey";
const CNT_PLATFORM_NAME: &str = "post_platforms_platform_name_key";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_publish_status_check";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_LINK_ARTICLE => DomainError::not_found("article"),
                    CNT_LINK_PLATFORM => DomainError::not_found("platform"),
                    CNT_PLATFORM_NAME => {
                        DomainError::Conflict("platform already exists".into())
                    }
                    CNT_ARTICLE_STATUS_CHECK => {
                        DomainError::Validation("invalid publish status".into())
                    }
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::PoolTimedOut => {
            DomainError::Persistence("database connection pool timed out".into())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
