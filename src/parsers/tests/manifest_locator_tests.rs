use crate::parsers::manifest::locate_build_manifest;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_exact_substring() {
        let page = "prefix /_next/static/abc123/_buildManifest.js suffix";
        assert_eq!(
            locate_build_manifest(page),
            Some("/_next/static/abc123/_buildManifest.js")
        );
    }

    #[test]
    fn test_locate_in_script_tag() {
        let page = r#"<!DOCTYPE html><html><head>
<script src="/_next/static/chunks/main-1a2b.js" defer=""></script>
<script src="/_next/static/K1s9-abc_Z/_buildManifest.js" defer=""></script>
<script src="/_next/static/K1s9-abc_Z/_ssgManifest.js" defer=""></script>
</head><body><div id="__next"></div></body></html>"#;
        assert_eq!(
            locate_build_manifest(page),
            Some("/_next/static/K1s9-abc_Z/_buildManifest.js")
        );
    }

    #[test]
    fn test_locate_strips_cdn_host() {
        // Only the path portion is matched, even behind an asset prefix
        let page = r#"<script src="https://cdn.example.net/_next/static/build-7/_buildManifest.js"></script>"#;
        assert_eq!(
            locate_build_manifest(page),
            Some("/_next/static/build-7/_buildManifest.js")
        );
    }

    #[test]
    fn test_locate_returns_first_match() {
        let page = "/_next/static/first/_buildManifest.js\n/_next/static/second/_buildManifest.js";
        assert_eq!(
            locate_build_manifest(page),
            Some("/_next/static/first/_buildManifest.js")
        );
    }

    #[test]
    fn test_locate_no_match() {
        // Plain page
        assert_eq!(locate_build_manifest("<html><body>Hello</body></html>"), None);

        // Empty page
        assert_eq!(locate_build_manifest(""), None);

        // Empty build id
        assert_eq!(locate_build_manifest("/_next/static//_buildManifest.js"), None);

        // Nested directory in place of the build id
        assert_eq!(locate_build_manifest("/_next/static/a/b/_buildManifest.js"), None);

        // Other manifests
        assert_eq!(locate_build_manifest("/_next/static/abc/_ssgManifest.js"), None);
    }
}
