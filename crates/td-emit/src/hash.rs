//! Content-based fingerprint of emitted metadata.

use sha2::{Digest, Sha256};

use crate::descriptor::PackageDescriptor;
use crate::error::EmitResult;

/// SHA-256 over the JSON form of a package descriptor, as lowercase hex.
///
/// Equal descriptors always hash equally, so two emission runs can be
/// compared without diffing their output.
pub fn fingerprint(descriptor: &PackageDescriptor) -> EmitResult<String> {
    let json = serde_json::to_string(descriptor)?;
    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_core::{Arch, CompilerFamily, ComponentKey, Os, TargetPlatform};

    use crate::descriptor::ComponentDescriptor;

    fn descriptor(version: &str) -> PackageDescriptor {
        PackageDescriptor {
            package: "tdlib".into(),
            version: version.into(),
            shared: false,
            platform: TargetPlatform::new(Os::Linux, CompilerFamily::Gcc, Arch::X86_64),
            file_name: "Td".into(),
            target_name: "Td".into(),
            components: vec![ComponentDescriptor {
                name: "td_tdutils".into(),
                key: ComponentKey::new("tdutils").unwrap(),
                exported_name: "td_tdutils".into(),
                target_name: "Td::td_tdutils".into(),
                file_name: "td_tdutils".into(),
                requirement_references: vec!["openssl::openssl".into()],
                link_targets: vec!["tdutils".into()],
                platform_extra_links: vec![],
            }],
        }
    }

    #[test]
    fn hash_stability() {
        let a = fingerprint(&descriptor("1.8.25")).unwrap();
        let b = fingerprint(&descriptor("1.8.25")).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
    }

    #[test]
    fn hash_differs_for_different_inputs() {
        let a = fingerprint(&descriptor("1.8.25")).unwrap();
        let b = fingerprint(&descriptor("1.8.24")).unwrap();
        assert_ne!(a, b);
    }
}
