//! Request handler owning engine and reader handle tables.
//!
//! Requests run synchronously to completion on `&mut self`. Every request
//! either succeeds or leaves both tables exactly as they were.

use std::collections::HashMap;

use serde_json::Value;
use tracing::{debug, warn};

use super::args;
use super::config::HandlerConfig;
use super::error::HandlerError;
use crate::engine::{HashEngine, DEFAULT_HASH_LENGTH};
use crate::events::{ErrorResponse, XofRequest, XofResponse};
use crate::primitive::{Blake3, Primitive};
use crate::reader::SeekableReader;

/// Dispatches [`XofRequest`]s against owned engines and readers.
pub struct XofHandler<P: Primitive = Blake3> {
    config: HandlerConfig,
    engines: HashMap<u64, HashEngine<P>>,
    readers: HashMap<u64, SeekableReader<P>>,
    next_handle: u64,
}

impl<P: Primitive> XofHandler<P> {
    /// Create a handler with the given limits
    pub fn new(config: HandlerConfig) -> Self {
        Self {
            config,
            engines: HashMap::new(),
            readers: HashMap::new(),
            next_handle: 1,
        }
    }

    /// Active limits
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    /// Number of live engines
    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }

    /// Number of live readers
    pub fn reader_count(&self) -> usize {
        self.readers.len()
    }

    /// Handle a request, folding failures into an error response.
    pub fn handle(&mut self, request: XofRequest) -> XofResponse {
        let op = request.op_name();
        match self.try_handle(request) {
            Ok(response) => response,
            Err(e) => {
                warn!(op, error_code = e.error_code(), error = %e, "request rejected");
                error_response(&e)
            }
        }
    }

    /// Parse a JSON request and handle it.
    pub fn handle_json(&mut self, raw: &str) -> XofResponse {
        match serde_json::from_str::<XofRequest>(raw) {
            Ok(request) => self.handle(request),
            Err(e) => {
                let e = HandlerError::MalformedRequest(e.to_string());
                warn!(error = %e, "request rejected");
                error_response(&e)
            }
        }
    }

    /// Handle a request.
    ///
    /// # Errors
    ///
    /// Any [`HandlerError`]; the handle tables are unchanged on failure.
    pub fn try_handle(&mut self, request: XofRequest) -> Result<XofResponse, HandlerError> {
        debug!(op = request.op_name(), "handling request");

        match request {
            XofRequest::CreateStandard => {
                self.ensure_engine_capacity()?;
                Ok(self.insert_engine(HashEngine::new_standard()))
            }
            XofRequest::CreateKeyed { key } => {
                self.ensure_engine_capacity()?;
                let key = args::bytes("key", key.as_ref())?;
                let engine = HashEngine::new_keyed(&key)?;
                Ok(self.insert_engine(engine))
            }
            XofRequest::CreateDeriveKey { context } => {
                self.ensure_engine_capacity()?;
                let context = args::bytes("context", context.as_ref())?;
                let engine = HashEngine::new_derive_key(&context)?;
                Ok(self.insert_engine(engine))
            }
            XofRequest::Update { engine, data } => self.update(engine, data),
            XofRequest::Digest { engine, length } => self.digest(engine, length),
            XofRequest::CreateReader { engine } => self.create_reader(engine),
            XofRequest::Read { reader, length } => {
                let length = args::length("length", length.as_ref(), None)?;
                self.check_read_length(length)?;
                let reader = self.reader_mut(reader)?;
                Ok(XofResponse::Bytes {
                    data: reader.read(length),
                })
            }
            XofRequest::ReadInto { reader, buffer } => {
                let mut buffer = args::bytes("buffer", buffer.as_ref())?;
                self.check_read_length(buffer.len())?;
                let reader = self.reader_mut(reader)?;
                let bytes_written = reader.read_into(&mut buffer);
                Ok(XofResponse::Written {
                    bytes_written,
                    buffer,
                })
            }
            XofRequest::GetPosition { reader } => Ok(XofResponse::Position {
                position: self.reader_mut(reader)?.position(),
            }),
            XofRequest::SetPosition { reader, position } => {
                let position = args::position("position", position.as_ref())?;
                let reader = self.reader_mut(reader)?;
                reader.set_position(position);
                Ok(XofResponse::Position { position })
            }
            XofRequest::NextChunk { reader } => {
                let reader = self.reader_mut(reader)?;
                // done is reported by the step that reaches the ceiling
                let data = reader.chunks().next().unwrap_or_default();
                Ok(XofResponse::Chunk {
                    data,
                    done: reader.is_exhausted(),
                })
            }
            XofRequest::DropEngine { engine } => self
                .engines
                .remove(&engine)
                .map(|_| XofResponse::Dropped)
                .ok_or(HandlerError::UnknownEngine(engine)),
            XofRequest::DropReader { reader } => self
                .readers
                .remove(&reader)
                .map(|_| XofResponse::Dropped)
                .ok_or(HandlerError::UnknownReader(reader)),
        }
    }

    fn update(&mut self, handle: u64, data: Option<Value>) -> Result<XofResponse, HandlerError> {
        let data = args::bytes("data", data.as_ref())?;
        let engine = self
            .engines
            .get_mut(&handle)
            .ok_or(HandlerError::UnknownEngine(handle))?;
        engine.update(&data);
        Ok(XofResponse::Updated { engine: handle })
    }

    fn digest(&self, handle: u64, length: Option<Value>) -> Result<XofResponse, HandlerError> {
        let length = args::length("length", length.as_ref(), Some(DEFAULT_HASH_LENGTH))?;
        self.check_read_length(length)?;
        let engine = self
            .engines
            .get(&handle)
            .ok_or(HandlerError::UnknownEngine(handle))?;
        Ok(XofResponse::Bytes {
            data: engine.digest_with_length(length),
        })
    }

    fn create_reader(&mut self, handle: u64) -> Result<XofResponse, HandlerError> {
        if self.readers.len() >= self.config.max_readers {
            return Err(HandlerError::TooManyReaders {
                max: self.config.max_readers,
            });
        }
        let reader = self
            .engines
            .get(&handle)
            .ok_or(HandlerError::UnknownEngine(handle))?
            .reader();

        let id = self.allocate_handle();
        self.readers.insert(id, reader);
        debug!(engine = handle, reader = id, "reader created");
        Ok(XofResponse::ReaderCreated { reader: id })
    }

    fn ensure_engine_capacity(&self) -> Result<(), HandlerError> {
        if self.engines.len() >= self.config.max_engines {
            return Err(HandlerError::TooManyEngines {
                max: self.config.max_engines,
            });
        }
        Ok(())
    }

    fn check_read_length(&self, requested: usize) -> Result<(), HandlerError> {
        if requested > self.config.max_read_length {
            return Err(HandlerError::ReadTooLarge {
                requested,
                max: self.config.max_read_length,
            });
        }
        Ok(())
    }

    fn insert_engine(&mut self, engine: HashEngine<P>) -> XofResponse {
        let id = self.allocate_handle();
        self.engines.insert(id, engine);
        XofResponse::EngineCreated { engine: id }
    }

    fn reader_mut(&mut self, handle: u64) -> Result<&mut SeekableReader<P>, HandlerError> {
        self.readers
            .get_mut(&handle)
            .ok_or(HandlerError::UnknownReader(handle))
    }

    fn allocate_handle(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }
}

impl<P: Primitive> Default for XofHandler<P> {
    fn default() -> Self {
        Self::new(HandlerConfig::default())
    }
}

fn error_response(e: &HandlerError) -> XofResponse {
    XofResponse::Error(ErrorResponse {
        error_code: e.error_code(),
        error_message: e.to_string(),
    })
}
