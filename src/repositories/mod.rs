pub(crate) mod coaches;
pub(crate) mod courses;
pub(crate) mod curriculum;
pub(crate) mod health;
pub(crate) mod submissions;
pub(crate) mod teams;

pub(crate) type Tx<'c> = sqlx::Transaction<'c, sqlx::Postgres>;
