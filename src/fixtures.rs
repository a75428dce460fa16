#[cfg(test)]
pub mod test {
    use std::fs;
    use std::path::PathBuf;

    use tempfile::TempDir;

    /// Write `content` to `{dir}/{name}` and return the full path.
    pub fn write_resource(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    // -- Equivalent documents in each format ------------------------------------

    pub const APP_TOML: &str = r#"
host = "localhost"
port = 8080
debug = false
tags = ["web", "api"]

[database]
url = "postgres://db"
pool_size = 5
"#;

    pub const APP_JSON: &str = r#"{
    "host": "localhost",
    "port": 8080,
    "debug": false,
    "tags": ["web", "api"],
    "database": {
        "url": "postgres://db",
        "pool_size": 5
    }
}"#;

    pub const APP_YAML: &str = r#"
host: localhost
port: 8080
debug: false
tags:
  - web
  - api
database:
  url: postgres://db
  pool_size: 5
"#;

    pub const APP_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<config>
    <host>localhost</host>
    <port>8080</port>
    <debug>false</debug>
    <tags>web</tags>
    <tags>api</tags>
    <database>
        <url>postgres://db</url>
        <pool_size>5</pool_size>
    </database>
</config>
"#;
}
