use serde::Deserialize;

const DEF_POOL_SIZE: u32 = 10;

#[derive(Debug, Deserialize)]
pub struct Database {
    host: String,
    port: u16,
    username: String,
    password: String,
    dbname: String,

    /// 커넥션 풀의 최대 커넥션 개수로 설정 되지 않을시 기본값은 10으로 설정 된다.
    pool_size: Option<u32>,
}

impl Database {
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn dbname(&self) -> &str {
        &self.dbname
    }

    pub fn pool_size(&self) -> u32 {
        self.pool_size.unwrap_or(DEF_POOL_SIZE)
    }

    pub fn url(&self) -> String {
        format!("postgres://{}:{}@{}:{}/{}", self.username(), self.password(), self.host(), self.port(), self.dbname())
    }
}
