//! URL 조립 단축 함수

/// 서버 위치 문자열을 만듭니다. 표준 포트(80/443)는 생략합니다.
pub fn base_url(schema: &str, host: &str, port: u16) -> String {
    if port == 80 || port == 443 {
        format!("{schema}://{host}")
    } else {
        format!("{schema}://{host}:{port}")
    }
}

/// HTTP 리소스의 최종 URI를 만듭니다.
///
/// `path`가 이미 호스트를 포함한 절대 URL이면 그대로 반환하고,
/// 상대 경로면 base url에 붙입니다 (앞의 슬래시는 보장).
pub fn uri(schema: &str, host: &str, port: u16, path: &str) -> String {
    if has_host(path) {
        path.to_string()
    } else if path.starts_with('/') {
        format!("{}{}", base_url(schema, host, port), path)
    } else {
        format!("{}/{}", base_url(schema, host, port), path)
    }
}

/// URL에 호스트가 포함돼 있는지
pub fn has_host(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_standard_ports() {
        assert_eq!(base_url("http", "localhost", 80), "http://localhost");
        assert_eq!(base_url("https", "localhost", 443), "https://localhost");
        assert_eq!(base_url("http", "localhost", 9090), "http://localhost:9090");
    }

    #[test]
    fn test_uri_joining() {
        assert_eq!(uri("http", "h", 9090, "/ping"), "http://h:9090/ping");
        assert_eq!(uri("http", "h", 9090, "ping"), "http://h:9090/ping");
        assert_eq!(
            uri("http", "h", 9090, "http://other:8080/ping"),
            "http://other:8080/ping"
        );
    }

    #[test]
    fn test_has_host() {
        assert!(has_host("http://a/b"));
        assert!(has_host("https://a/b"));
        assert!(!has_host("/a/b"));
    }
}
