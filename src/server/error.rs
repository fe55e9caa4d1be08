#[derive(Debug)]
pub enum StartupError {
    PortInUse(u16),
    Io(std::io::Error),
}

impl StartupError {
    pub fn from_bind(err: std::io::Error, port: u16) -> Self {
        if err.kind() == std::io::ErrorKind::AddrInUse {
            StartupError::PortInUse(port)
        } else {
            StartupError::Io(err)
        }
    }
}

impl std::fmt::Display for StartupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StartupError::PortInUse(port) => write!(f, "port {} is already in use", port),
            StartupError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for StartupError {}

impl From<std::io::Error> for StartupError {
    fn from(err: std::io::Error) -> Self {
        StartupError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_addr_in_use_maps_to_port_in_use() {
        let err = StartupError::from_bind(Error::from(ErrorKind::AddrInUse), 3000);
        match &err {
            StartupError::PortInUse(port) => assert_eq!(*port, 3000),
            _ => panic!("Expected PortInUse"),
        }
        assert!(err.to_string().contains("3000"));
    }

    #[test]
    fn test_other_errors_map_to_io() {
        let err = StartupError::from_bind(Error::from(ErrorKind::PermissionDenied), 3000);
        match err {
            StartupError::Io(inner) => assert_eq!(inner.kind(), ErrorKind::PermissionDenied),
            _ => panic!("Expected Io"),
        }
    }
}
