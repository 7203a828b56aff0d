use crate::domain::errors::DomainError;

const CNT_QUESTION_SLUG: &str = "questions_slug_key";
const CNT_QUESTION_AUTHOR: &str = "questions_author_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    // Slug uniqueness is resolved before insert; reaching the
                    // constraint means a lost race, which is a server-side
                    // failure rather than a caller mistake.
                    CNT_QUESTION_SLUG => {
                        DomainError::Persistence("duplicate slug reached the store".into())
                    }
                    CNT_USER_EMAIL => DomainError::Conflict("email already registered".into()),
                    CNT_QUESTION_AUTHOR => DomainError::NotFound("author not found".into()),
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
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
