use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// One request as seen by the stub service.
#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
}

/// Loopback stand-in for the classification service.
///
/// Answers `/schema` and `/predict` with canned JSON, one connection per request.
pub struct ClassifierServer {
    pub base_url: String,
    pub requests: Receiver<RecordedRequest>,
}

impl ClassifierServer {
    pub fn start(schema_body: &str, predict: (u16, &str)) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let addr = listener.local_addr().expect("stub address");
        let schema_body = schema_body.to_string();
        let (predict_status, predict_body) = (predict.0, predict.1.to_string());
        let (tx, requests) = mpsc::channel();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else {
                    break;
                };
                let request = read_request(&mut stream);
                let response = match (request.method.as_str(), request.path.as_str()) {
                    ("GET", "/schema") => json_response(200, &schema_body),
                    ("POST", "/predict") => json_response(predict_status, &predict_body),
                    _ => json_response(404, r#"{"detail":"Not Found"}"#),
                };
                let _ = stream.write_all(response.as_bytes());
                if tx.send(request).is_err() {
                    break;
                }
            }
        });
        Self {
            base_url: format!("http://{addr}"),
            requests,
        }
    }
}

/// A loopback URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}")
}

fn json_response(status: u16, body: &str) -> String {
    let reason = match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        _ => "Error",
    };
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
}

fn read_request(stream: &mut impl Read) -> RecordedRequest {
    let mut data = Vec::new();
    let mut buf = [0u8; 1024];
    let header_end = loop {
        if let Some(pos) = find_header_end(&data) {
            break pos;
        }
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break data.len(),
            Ok(read) => data.extend_from_slice(&buf[..read]),
        }
    };
    let head = String::from_utf8_lossy(&data[..header_end]).into_owned();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);
    let body_start = (header_end + 4).min(data.len());
    while data.len() < body_start + content_length {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(read) => data.extend_from_slice(&buf[..read]),
        }
    }
    let mut request_line = head.lines().next().unwrap_or_default().split_whitespace();
    RecordedRequest {
        method: request_line.next().unwrap_or_default().to_string(),
        path: request_line.next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&data[body_start..]).into_owned(),
    }
}

fn find_header_end(data: &[u8]) -> Option<usize> {
    data.windows(4).position(|window| window == b"\r\n\r\n")
}
