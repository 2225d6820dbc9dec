use crate::{hasher::Algorithm, Calculator, E};
use base64::{engine::general_purpose::STANDARD, Engine};
use std::fmt;

/// Textual representation of a digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Lowercase hex without separators.
    Hex,
    /// Standard base64 alphabet with padding.
    Base64,
}

impl Encoding {
    pub fn encode(&self, digest: &[u8]) -> String {
        match self {
            Encoding::Hex => hex::encode(digest),
            Encoding::Base64 => STANDARD.encode(digest),
        }
    }
}

/// One line of the report: which digest is printed under which label and how it's encoded.
#[derive(Debug, Clone, Copy)]
pub struct Header {
    pub label: &'static str,
    pub algorithm: Algorithm,
    pub encoding: Encoding,
}

/// Lines of the report in the order they are printed. Labels and order are relied on by tools
/// parsing the output.
pub const HEADERS: [Header; 7] = [
    Header {
        label: "ETag",
        algorithm: Algorithm::Md5,
        encoding: Encoding::Hex,
    },
    Header {
        label: "Content-MD5",
        algorithm: Algorithm::Md5,
        encoding: Encoding::Base64,
    },
    Header {
        label: "x-amz-checksum-crc32",
        algorithm: Algorithm::Crc32,
        encoding: Encoding::Base64,
    },
    Header {
        label: "x-amz-checksum-crc32c",
        algorithm: Algorithm::Crc32c,
        encoding: Encoding::Base64,
    },
    Header {
        label: "x-amz-checksum-crc64nvme",
        algorithm: Algorithm::Crc64Nvme,
        encoding: Encoding::Base64,
    },
    Header {
        label: "x-amz-checksum-sha1",
        algorithm: Algorithm::Sha1,
        encoding: Encoding::Base64,
    },
    Header {
        label: "x-amz-checksum-sha256",
        algorithm: Algorithm::Sha256,
        encoding: Encoding::Base64,
    },
];

/// Rendered values of all `HEADERS`. `Display` prints one `label: value` line per header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    lines: Vec<(&'static str, String)>,
}

impl Report {
    pub fn new(calculator: &Calculator) -> Result<Self, E> {
        let lines = HEADERS
            .iter()
            .map(|header| -> Result<(&'static str, String), E> {
                Ok((
                    header.label,
                    header.encoding.encode(&calculator.result(header.algorithm)?),
                ))
            })
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Self { lines })
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn lines(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.lines.iter().map(|(label, value)| (*label, value.as_str()))
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.lines() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::{Encoding, Report};
    use crate::{Calculator, E};

    #[test]
    fn abc() -> Result<(), E> {
        let mut calculator = Calculator::new();
        calculator.absorb(b"abc")?;
        let report = Report::new(&calculator)?;
        assert_eq!(
            report.to_string(),
            "ETag: 900150983cd24fb0d6963f7d28e17f72\n\
             Content-MD5: kAFQmDzST7DWlj99KOF/cg==\n\
             x-amz-checksum-crc32: NSRBwg==\n\
             x-amz-checksum-crc32c: Nks/tw==\n\
             x-amz-checksum-crc64nvme: BeXKuz/B+us=\n\
             x-amz-checksum-sha1: qZk+NkcGgWq6PiVxeFDCbJzQ2J0=\n\
             x-amz-checksum-sha256: ungWv48Bz+pBQUDeXa4iI7ADYaOWF3qctBD/YfIAFa0=\n"
        );
        assert_eq!(report.get("x-amz-checksum-crc32c"), Some("Nks/tw=="));
        assert_eq!(report.get("x-amz-checksum-md5"), None);
        Ok(())
    }

    #[test]
    fn empty() -> Result<(), E> {
        let report = Report::new(&Calculator::new())?;
        assert_eq!(report.lines().count(), 7);
        assert_eq!(report.get("ETag"), Some("d41d8cd98f00b204e9800998ecf8427e"));
        assert_eq!(report.get("Content-MD5"), Some("1B2M2Y8AsgTpgAmY7PhCfg=="));
        assert_eq!(report.get("x-amz-checksum-crc32"), Some("AAAAAA=="));
        assert_eq!(report.get("x-amz-checksum-crc64nvme"), Some("AAAAAAAAAAA="));
        assert_eq!(
            report.get("x-amz-checksum-sha256"),
            Some("47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=")
        );
        Ok(())
    }

    #[test]
    fn encoding() {
        let digest = [0x0d, 0x4a, 0x11, 0x85];
        assert_eq!(Encoding::Hex.encode(&digest), "0d4a1185");
        assert_eq!(Encoding::Base64.encode(&digest), "DUoRhQ==");
    }
}
