//! # Servidor TCP
//! src/server/tcp.rs
//!
//! Escucha en un puerto con `SO_REUSEADDR` y atiende las conexiones de a una,
//! en el mismo thread que hace `accept`. Un cliente lento bloquea a los demás;
//! para un servidor de desarrollo local es aceptable.

use crate::config::Config;
use crate::handler::{add_common_headers, FileHandler};
use crate::http::{Request, Response, StatusCode};
use log::{debug, error, info, warn};
use socket2::{Domain, Protocol, Socket, Type};
use std::io::{self, Read};
use std::net::{SocketAddr, TcpListener, TcpStream, ToSocketAddrs};
use std::time::Duration;

/// Tamaño máximo de request line + headers
pub const MAX_HEAD_BYTES: usize = 64 * 1024;

/// Tiempo máximo esperando datos de un cliente
pub const READ_TIMEOUT: Duration = Duration::from_secs(30);

const BACKLOG: i32 = 128;

/// Servidor de archivos estáticos
pub struct Server {
    config: Config,
    handler: FileHandler,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config, handler: FileHandler) -> Self {
        Self {
            config,
            handler,
            listener: None,
        }
    }

    /// Hace bind del puerto configurado y retorna la dirección real
    /// (útil con puerto 0).
    ///
    /// Un error acá (puerto en uso, sin permisos) es fatal para el proceso.
    pub fn bind(&mut self) -> io::Result<SocketAddr> {
        let listener = bind_reuse_address(&self.config.address())?;
        let addr = listener.local_addr()?;
        self.listener = Some(listener);
        Ok(addr)
    }

    pub fn listener(&self) -> Option<&TcpListener> {
        self.listener.as_ref()
    }

    pub fn handler(&self) -> &FileHandler {
        &self.handler
    }

    /// STARTING → SERVING. Solo retorna si falla el bind.
    pub fn run(&mut self) -> io::Result<()> {
        let listener = match self.listener.take() {
            Some(listener) => listener,
            None => bind_reuse_address(&self.config.address())?,
        };

        let port = listener.local_addr()?.port();
        println!("serving at port {}", port);
        debug!("root: {}", self.handler.root().display());

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    if let Err(e) = Self::handle_connection(stream, &self.handler) {
                        warn!("connection error: {}", e);
                    }
                }
                Err(e) => {
                    error!("accept failed: {}", e);
                }
            }
        }

        Ok(())
    }

    /// Atiende una conexión completa: lee, responde y cierra.
    pub fn handle_connection(mut stream: TcpStream, handler: &FileHandler) -> io::Result<()> {
        let peer = stream
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        stream.set_read_timeout(Some(READ_TIMEOUT))?;

        let head = read_head(&mut stream)?;
        if head.is_empty() {
            debug!("{} closed without sending data", peer);
            return Ok(());
        }

        let (response, request_line) = if head.len() > MAX_HEAD_BYTES {
            let mut response = Response::error(StatusCode::BadRequest, "Request header too large");
            add_common_headers(&mut response);
            (response, "-".to_string())
        } else {
            match Request::parse(&head) {
                Ok(request) => (handler.handle(&request), request.request_line()),
                Err(e) => {
                    let mut response = Response::error(e.status(), &e.to_string());
                    add_common_headers(&mut response);
                    (response, e.to_string())
                }
            }
        };

        let status = response.status();
        if status.is_server_error() {
            error!("{} \"{}\" {}", peer, request_line, status.as_u16());
        } else if status.is_client_error() {
            warn!("{} \"{}\" {}", peer, request_line, status.as_u16());
        } else {
            info!("{} \"{}\" {}", peer, request_line, status.as_u16());
        }

        response.write_to(&mut stream)
    }
}

/// Bind con SO_REUSEADDR activado antes del bind, para poder reiniciar el
/// servidor en el mismo puerto sin esperar a que expire TIME_WAIT.
pub fn bind_reuse_address(address: &str) -> io::Result<TcpListener> {
    let addr = address.to_socket_addrs()?.next().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("could not resolve {}", address),
        )
    })?;

    let socket = Socket::new(Domain::for_address(addr), Type::STREAM, Some(Protocol::TCP))?;
    socket.set_reuse_address(true)?;
    socket.bind(&addr.into())?;
    socket.listen(BACKLOG)?;

    Ok(socket.into())
}

/// Lee hasta el fin de los headers (primera línea vacía), EOF o el límite.
///
/// Si se pasa del límite sin encontrar el fin, retorna más de
/// `MAX_HEAD_BYTES` bytes para que el llamador lo rechace.
fn read_head<R: Read>(stream: &mut R) -> io::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk)?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        if let Some(end) = find_head_end(&buffer) {
            buffer.truncate(end);
            break;
        }
        if buffer.len() > MAX_HEAD_BYTES {
            break;
        }
    }

    Ok(buffer)
}

/// Fin de la cabecera: la primera línea vacía, terminada en `\r\n` o `\n`.
///
/// Retorna la posición justo después de esa línea vacía.
fn find_head_end(buffer: &[u8]) -> Option<usize> {
    buffer
        .iter()
        .enumerate()
        .filter(|(_, &byte)| byte == b'\n')
        .find_map(|(i, _)| {
            let rest = &buffer[i + 1..];
            if rest.starts_with(b"\r\n") {
                Some(i + 3)
            } else if rest.starts_with(b"\n") {
                Some(i + 2)
            } else {
                None
            }
        })
}
