use crate::model::TableSet;

/// Tables present in `remote` and absent from `local`.
///
/// Both inputs are treated as sets: duplicates and ordering have no effect
/// on the result. Tables that exist only locally are not reported.
pub fn tables_only_in_remote<R, L>(remote: R, local: L) -> TableSet
where
    R: IntoIterator,
    R::Item: AsRef<str>,
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    let mut only_remote: TableSet = remote
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();

    for name in local {
        only_remote.remove(name.as_ref());
    }

    only_remote
}
