pub struct UrlUtil;

impl UrlUtil {
    /// `<base>/<cluster>/<path>?<query>` with stray separators removed from
    /// each segment.
    pub fn build_url(base_url: &str, cluster: &str, path: &str, query: &str) -> String {
        let path = path.trim_end_matches('?').trim_matches('/');
        format!(
            "{}/{}/{}?{}",
            Self::trim_base(base_url),
            cluster.trim_matches('/'),
            path,
            query
        )
    }

    #[inline]
    pub fn join(base_url: &str, path: &str) -> String {
        format!("{}/{}", Self::trim_base(base_url), path.trim_start_matches('/'))
    }

    #[inline]
    fn trim_base(base_url: &str) -> &str {
        base_url.trim_end_matches('/')
    }
}
