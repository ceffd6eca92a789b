//! Runs one invocation end to end and maps the outcome to an exit status.
//!
//! # Design
//! Output is buffered in the exchange before anything is written, so a
//! failed invocation leaves stdout empty. Every failure is reported on the
//! error stream with an `Error:` label and yields `EXIT_FAILURE`; the HTTP
//! status of a completed exchange never affects the exit status.

use std::io::{self, Write};

use req_core::{execute, render_body, Exchange, RequestError, RequestSpec, Transport};
use tracing::info;

use crate::style::Palette;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

/// Send `spec` over `transport`, print the exchange to `out`, and report any
/// failure to `err`.
pub fn run<T, O, E>(
    spec: &RequestSpec,
    transport: &T,
    out: &mut O,
    err: &mut E,
    out_palette: Palette,
    err_palette: Palette,
) -> u8
where
    T: Transport,
    O: Write,
    E: Write,
{
    let exchange = match execute(spec, transport) {
        Ok(exchange) => exchange,
        Err(e) => {
            // The error stream is the last resort; nothing to do if it fails too.
            let _ = report_error(err, &e, err_palette);
            return EXIT_FAILURE;
        }
    };

    info!(
        status = exchange.response.status,
        bytes = exchange.response.body.len(),
        "exchange complete"
    );

    match print_exchange(out, &exchange, out_palette) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            let _ = writeln!(err, "{} failed to write output: {e}", err_palette.error_label());
            EXIT_FAILURE
        }
    }
}

/// Print the request line, status line, and rendered body.
pub fn print_exchange<W: Write>(out: &mut W, exchange: &Exchange, palette: Palette) -> io::Result<()> {
    let request = &exchange.request;
    let response = &exchange.response;
    writeln!(out, "{}", palette.request_line(request.method, &request.url))?;
    writeln!(out, "{}", palette.status_line(response.status, &response.status_text))?;
    out.write_all(render_body(&response.body).as_bytes())?;
    writeln!(out)?;
    out.flush()
}

/// Write `error` to `err`, one labeled line per malformed header.
pub fn report_error<W: Write>(err: &mut W, error: &RequestError, palette: Palette) -> io::Result<()> {
    let label = palette.error_label();
    match error {
        RequestError::MalformedHeaders(raws) => {
            for raw in raws {
                writeln!(err, "{label} Invalid header format: {raw} (use 'Key: Value')")?;
            }
            Ok(())
        }
        other => writeln!(err, "{label} {other}"),
    }
}
