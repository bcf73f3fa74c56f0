//! End-to-end lookups through the real HTTP fetcher, served by a local
//! listener speaking just enough HTTP/1.1, plus an ignored test against the
//! live API.

use hibp_range_client::{Error, Finder};
use sha1::{Digest, Sha1};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

const RANGE_BODY: &str = "\
00000000000000000000000000000000000:13
0018A45C4D1DEF81644B54AB7F969B88D65:229
01010101010101010101010101010101010:17
012A7CA357541F0AC487871FEEC1891C49C:401
AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA:23
";

/// Serves every request with the given status line and body, one connection
/// at a time, and returns a URL template pointing at the listener.
async fn spawn_range_server(status: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = match listener.accept().await {
                Ok(conn) => conn,
                Err(_) => return,
            };

            // Drain the request head; the canned answer does not depend on
            // it.
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                match socket.read(&mut buf).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => {
                        request.extend_from_slice(&buf[..n]);
                        if request.windows(4).any(|w| w == b"\r\n\r\n") {
                            break;
                        }
                    }
                }
            }

            let response = format!(
                "HTTP/1.1 {status}\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len(),
            );
            let _ = socket.write_all(response.as_bytes()).await;
        }
    });

    format!("http://{addr}/range/{{prefix}}")
}

fn sha1_of(password: &str) -> [u8; 20] {
    let mut hasher = Sha1::new();
    hasher.update(password.as_bytes());
    hasher.finalize().into()
}

#[tokio::test]
async fn find_matches_against_served_range() {
    let template = spawn_range_server("200 OK", RANGE_BODY).await;
    let finder = Finder::builder().url_template(template).build().unwrap();

    assert_eq!(finder.find(&sha1_of("melobie")).await.unwrap(), 401);
    assert_eq!(finder.find(&sha1_of("lauragpe")).await.unwrap(), 229);
    assert_eq!(finder.find(&sha1_of("gonna-miss")).await.unwrap(), 0);
}

#[tokio::test]
async fn throttled_status_surfaces_as_error() {
    let template = spawn_range_server("429 Too Many Requests", "").await;
    let finder = Finder::builder().url_template(template).build().unwrap();

    let err = finder.find(&sha1_of("melobie")).await.unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 429, .. }));
    assert!(err.to_string().contains("429"));
}

#[tokio::test]
#[ignore = "hits the live Pwned Passwords API"]
async fn live_lookup_password123() {
    let count = Finder::new().find_password("password123").await.unwrap();
    assert!(
        count > 0,
        "password123 should be found in the breach corpus"
    );
}
