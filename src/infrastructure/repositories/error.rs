use crate::domain::errors::DomainError;

const SQLSTATE_STRING_TOO_LONG: &str = "22001";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return DomainError::Persistence(format!(
                    "database constraint violation: {constraint}"
                ));
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Persistence("unique constraint violated".into());
                    }
                    "23502" => {
                        return DomainError::Validation("required column is null".into());
                    }
                    SQLSTATE_STRING_TOO_LONG => {
                        return DomainError::Validation("value too long for column".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        _ => DomainError::Persistence(err.to_string()),
    }
}
