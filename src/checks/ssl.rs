//! Live TLS certificate inspection
//!
//! Opens a TCP connection to `domain:443`, performs a TLS handshake with SNI
//! and grades the presented certificate. Strict certificate verification is
//! tried first, with a permissive retry so that self-signed and expired
//! certificates can still be parsed and graded. `rustls` handles TLS 1.2/1.3;
//! servers pinned to TLS 1.0/1.1 are probed with `native-tls` since rustls
//! does not negotiate legacy protocols.
//!
//! Inspection is total: every network, handshake or parsing failure is folded
//! into a degraded `N/A` report instead of propagating.

use crate::checks::certificate::CertificateChecker;
use crate::config::settings::SslSettings;
use crate::models::{CertificateReport, SslGrade, TlsProtocol};
use crate::utils::SslError;
use rustls::client::danger::{HandshakeSignatureValid, ServerCertVerified, ServerCertVerifier};
use rustls::pki_types::{CertificateDer, ServerName, UnixTime};
use rustls::{ClientConfig, DigitallySignedStruct, Error as RustlsError, SignatureScheme};
use std::sync::Arc;
use tokio::net::TcpStream;
use tracing::{debug, warn};

const HTTPS_PORT: u16 = 443;

/// A certificate verifier that accepts any certificate.
/// Used as a fallback to allow analysis of self-signed/untrusted certs.
#[derive(Debug)]
struct AcceptAnyCertVerifier;

impl ServerCertVerifier for AcceptAnyCertVerifier {
    fn verify_server_cert(
        &self,
        _end_entity: &CertificateDer<'_>,
        _intermediates: &[CertificateDer<'_>],
        _server_name: &ServerName<'_>,
        _ocsp_response: &[u8],
        _now: UnixTime,
    ) -> Result<ServerCertVerified, RustlsError> {
        Ok(ServerCertVerified::assertion())
    }

    fn verify_tls12_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn verify_tls13_signature(
        &self,
        _message: &[u8],
        _cert: &CertificateDer<'_>,
        _dss: &DigitallySignedStruct,
    ) -> Result<HandshakeSignatureValid, RustlsError> {
        Ok(HandshakeSignatureValid::assertion())
    }

    fn supported_verify_schemes(&self) -> Vec<SignatureScheme> {
        vec![
            SignatureScheme::RSA_PKCS1_SHA256,
            SignatureScheme::RSA_PKCS1_SHA384,
            SignatureScheme::RSA_PKCS1_SHA512,
            SignatureScheme::ECDSA_NISTP256_SHA256,
            SignatureScheme::ECDSA_NISTP384_SHA384,
            SignatureScheme::ECDSA_NISTP521_SHA512,
            SignatureScheme::RSA_PSS_SHA256,
            SignatureScheme::RSA_PSS_SHA384,
            SignatureScheme::RSA_PSS_SHA512,
            SignatureScheme::ED25519,
            SignatureScheme::ED448,
        ]
    }
}

/// Raw result of a successful handshake, before certificate parsing
struct HandshakeOutcome {
    protocol: TlsProtocol,
    leaf_der: Vec<u8>,
    trust_verified: bool,
}

/// Certificate inspector
pub struct SslChecker {
    settings: SslSettings,
}

impl SslChecker {
    /// Create a new certificate inspector with the given settings
    pub fn new(settings: SslSettings) -> Self {
        // Ensure a default crypto provider is installed
        let _ = rustls::crypto::ring::default_provider().install_default();
        Self { settings }
    }

    /// Inspect the certificate presented by `domain:443`.
    ///
    /// Never fails: any connection, handshake or parsing problem yields a
    /// degraded report with grade `N/A` and the reason recorded.
    pub async fn inspect(&self, domain: &str) -> CertificateReport {
        match self.try_inspect(domain).await {
            Ok(report) => report,
            Err(e) => {
                warn!(domain, error = %e, "certificate inspection degraded");
                CertificateReport::degraded(e.to_string())
            }
        }
    }

    async fn try_inspect(&self, domain: &str) -> Result<CertificateReport, SslError> {
        let outcome = match self.handshake(domain, false).await {
            Ok(outcome) => outcome,
            Err(e) if is_certificate_error(&e) => {
                debug!(domain, error = %e, "strict verification failed, retrying permissive");
                self.handshake(domain, true).await?
            }
            Err(e @ SslError::HandshakeFailed { .. }) => {
                // TCP worked but the handshake failed: the server may be
                // pinned to a protocol rustls does not speak.
                match self.legacy_handshake(domain).await {
                    Some(outcome) => outcome,
                    None => return Err(e),
                }
            }
            Err(e) => return Err(e),
        };

        let parsed = CertificateChecker::new().parse(&outcome.leaf_der)?;
        let days = parsed.days_until_expiry();
        let is_valid = parsed.is_time_valid() && outcome.trust_verified;

        Ok(CertificateReport {
            grade: SslGrade::from_expiry_and_protocol(days, Some(outcome.protocol)),
            protocol: Some(outcome.protocol),
            valid_from: Some(parsed.not_before),
            valid_to: Some(parsed.not_after),
            issuer: Some(parsed.issuer_org),
            subject: parsed.subject_cn,
            days_until_expiry: Some(days),
            is_valid,
            trust_verified: outcome.trust_verified,
            error: None,
        })
    }

    async fn handshake(
        &self,
        domain: &str,
        accept_invalid_certs: bool,
    ) -> Result<HandshakeOutcome, SslError> {
        let config = if accept_invalid_certs {
            ClientConfig::builder()
                .dangerous()
                .with_custom_certificate_verifier(Arc::new(AcceptAnyCertVerifier))
                .with_no_client_auth()
        } else {
            let root_store = rustls::RootCertStore::from_iter(
                webpki_roots::TLS_SERVER_ROOTS.iter().cloned(),
            );
            ClientConfig::builder()
                .with_root_certificates(root_store)
                .with_no_client_auth()
        };
        let connector = tokio_rustls::TlsConnector::from(Arc::new(config));

        let stream = tokio::time::timeout(
            self.settings.connect_timeout(),
            TcpStream::connect((domain, HTTPS_PORT)),
        )
        .await
        .map_err(|_| SslError::ConnectTimeout {
            domain: domain.to_string(),
            port: HTTPS_PORT,
        })?
        .map_err(|e| SslError::ConnectionFailed {
            domain: domain.to_string(),
            port: HTTPS_PORT,
            message: e.to_string(),
        })?;

        let server_name =
            ServerName::try_from(domain.to_string()).map_err(|_| SslError::ConfigurationError {
                message: format!("invalid server name: {domain}"),
            })?;

        let tls_stream = tokio::time::timeout(
            self.settings.handshake_timeout(),
            connector.connect(server_name, stream),
        )
        .await
        .map_err(|_| SslError::HandshakeTimeout {
            domain: domain.to_string(),
        })?
        .map_err(|e| SslError::HandshakeFailed {
            domain: domain.to_string(),
            message: e.to_string(),
        })?;

        let (_, connection) = tls_stream.get_ref();

        let protocol = match connection.protocol_version() {
            Some(rustls::ProtocolVersion::TLSv1_3) => TlsProtocol::Tls13,
            _ => TlsProtocol::Tls12,
        };

        let leaf_der = connection
            .peer_certificates()
            .and_then(|certs| certs.first())
            .map(|c| c.as_ref().to_vec())
            .ok_or_else(|| SslError::NoPeerCertificate {
                domain: domain.to_string(),
            })?;

        Ok(HandshakeOutcome {
            protocol,
            leaf_der,
            trust_verified: !accept_invalid_certs,
        })
    }

    /// Probe TLS 1.1 then TLS 1.0 with native-tls pinned to a single version.
    /// Returns None when neither legacy protocol can be negotiated.
    async fn legacy_handshake(&self, domain: &str) -> Option<HandshakeOutcome> {
        for (pinned, protocol) in [
            (native_tls::Protocol::Tlsv11, TlsProtocol::Tls11),
            (native_tls::Protocol::Tlsv10, TlsProtocol::Tls10),
        ] {
            let connector = match native_tls::TlsConnector::builder()
                .min_protocol_version(Some(pinned))
                .max_protocol_version(Some(pinned))
                .danger_accept_invalid_certs(true)
                .build()
            {
                Ok(connector) => tokio_native_tls::TlsConnector::from(connector),
                Err(_) => continue,
            };

            let stream = match tokio::time::timeout(
                self.settings.connect_timeout(),
                TcpStream::connect((domain, HTTPS_PORT)),
            )
            .await
            {
                Ok(Ok(stream)) => stream,
                _ => return None,
            };

            if let Ok(Ok(tls_stream)) = tokio::time::timeout(
                self.settings.handshake_timeout(),
                connector.connect(domain, stream),
            )
            .await
            {
                let leaf_der = tls_stream
                    .get_ref()
                    .peer_certificate()
                    .ok()
                    .flatten()
                    .and_then(|cert| cert.to_der().ok());

                if let Some(leaf_der) = leaf_der {
                    debug!(domain, %protocol, "legacy protocol negotiated");
                    return Some(HandshakeOutcome {
                        protocol,
                        leaf_der,
                        trust_verified: false,
                    });
                }
            }
        }
        None
    }
}

/// Whether a handshake error is a certificate-trust problem worth a
/// permissive retry, as opposed to a connectivity or protocol failure.
fn is_certificate_error(e: &SslError) -> bool {
    let message = e.to_string();
    message.contains("certificate")
        || message.contains("UnknownIssuer")
        || message.contains("SelfSigned")
        || message.contains("Expired")
        || message.contains("invalid peer")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unresolvable_domain_degrades_to_not_available() {
        let checker = SslChecker::new(SslSettings {
            connect_timeout_secs: 2,
            handshake_timeout_secs: 2,
        });

        let report = checker.inspect("domain.invalid").await;

        assert_eq!(report.grade, SslGrade::NotAvailable);
        assert!(!report.is_valid);
        assert!(report.error.is_some());
    }
}
