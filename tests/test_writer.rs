use minihttpd::http::response::{ContentType, Response};
use minihttpd::http::writer::{serialize_response, ResponseWriter};
use tokio::io::AsyncReadExt;

#[test]
fn test_serialize_exact_wire_format() {
    let response = Response::ok(ContentType::Text, "abc");
    let bytes = serialize_response(&response);

    assert_eq!(
        &bytes[..],
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\n\r\nabc"
    );
}

#[test]
fn test_serialize_not_found_octet_stream() {
    let response = Response::not_found(ContentType::OctetStream, "File Not Found");
    let bytes = serialize_response(&response);

    assert_eq!(
        &bytes[..],
        &b"HTTP/1.1 404 Not Found\r\nContent-Type: application/octet-stream\r\nContent-Length: 14\r\n\r\nFile Not Found"[..]
    );
}

#[test]
fn test_serialize_empty_body() {
    let response = Response::ok(ContentType::Text, "");
    let bytes = serialize_response(&response);

    assert!(bytes.ends_with(b"Content-Length: 0\r\n\r\n"));
}

#[test]
fn test_serialize_multibyte_body_uses_byte_length() {
    let body = "grüße 👋";
    let response = Response::ok(ContentType::Text, body.to_string());
    let bytes = serialize_response(&response);
    let text = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(text.contains(&format!("Content-Length: {}\r\n", body.len())));
    assert!(text.ends_with(body));
}

#[tokio::test]
async fn test_writer_writes_everything() {
    let response = Response::created(ContentType::Text, "File Created");
    let expected = serialize_response(&response);

    let (mut client, mut server) = tokio::io::duplex(8);
    let mut writer = ResponseWriter::new(&response);

    let write = tokio::spawn(async move {
        writer.write_to_stream(&mut server).await.unwrap();
        assert!(writer.is_done());
    });

    let mut received = vec![0u8; expected.len()];
    client.read_exact(&mut received).await.unwrap();
    write.await.unwrap();

    assert_eq!(received, expected.to_vec());
}
