use httpwire::{
    Connection,
    Cookie,
    Date,
    SetCookie,
    StartLine,
};
use std::net::{
    TcpListener,
    TcpStream,
};
use std::thread;

#[test]
fn request_and_response_over_loopback() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let server = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut connection = Connection::server(stream);
        assert!(connection.receive_head().unwrap());
        assert_eq!(Some("POST"), connection.method());
        assert_eq!(Some("/echo"), connection.path());
        assert_eq!(Some("HTTP/1.1"), connection.version());
        let cookie = Cookie::parse(connection.header("cookie").unwrap()).unwrap();
        assert_eq!(Some("abc"), cookie.get("session"));
        let body = connection.receive_body_to_string().unwrap();
        assert!(connection.body_received());
        let set_cookie = SetCookie::new("visits", "1").unwrap();
        connection.send_start(StartLine::Status { code: 200, phrase: "OK" }, false).unwrap();
        connection.send_header("Date", &Date::now().unwrap().to_string()).unwrap();
        connection.send_header("Set-Cookie", &set_cookie.to_string()).unwrap();
        connection.send_header("Content-Length", &body.len().to_string()).unwrap();
        connection.send_body(body.as_bytes()).unwrap();
        connection.send_end().unwrap();
        connection.close();
    });

    let stream = TcpStream::connect(address).unwrap();
    let mut connection = Connection::client(stream);
    connection.send_start(StartLine::Request { method: "POST", target: "/echo" }, false).unwrap();
    connection.send_header("Host", "localhost").unwrap();
    connection.send_header("Cookie", "session=abc; theme=dark").unwrap();
    connection.send_header("Content-Length", "11").unwrap();
    connection.send_body(b"hello, ").unwrap();
    connection.send_body(b"echo").unwrap();
    assert!(connection.receive_head().unwrap());
    assert_eq!(Some(200), connection.status_code());
    assert_eq!(Some("OK"), connection.status_phrase());
    assert!(Date::parse(connection.header("date").unwrap()).is_ok());
    let set_cookie = SetCookie::parse(connection.header("set-cookie").unwrap()).unwrap();
    assert_eq!("visits", set_cookie.name());
    assert_eq!(Ok(Some(11)), connection.content_length().map_err(|_| ()));
    assert_eq!("hello, echo", connection.receive_body_to_string().unwrap());
    server.join().unwrap();
}

#[test]
fn peer_closing_idle_connection_yields_no_head() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    let client = thread::spawn(move || {
        let stream = TcpStream::connect(address).unwrap();
        drop(stream);
    });
    let (stream, _) = listener.accept().unwrap();
    let mut connection = Connection::server(stream);
    assert!(!connection.receive_head().unwrap());
    assert!(!connection.head_received());
    client.join().unwrap();
}
