// std imports
use std::borrow::Cow;

// ---

/// Text is anything that can be viewed as a UTF-8 encoded byte string.
///
/// String and byte representations are borrowed as they are,
/// codepoint sequences are encoded once at the boundary.
pub trait Text {
    fn utf8(&self) -> Cow<'_, [u8]>;
}

impl Text for str {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl Text for String {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        self.as_str().utf8()
    }
}

impl Text for [u8] {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl<const N: usize> Text for [u8; N] {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Text for Vec<u8> {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }
}

impl Text for [char] {
    fn utf8(&self) -> Cow<'_, [u8]> {
        Cow::Owned(self.iter().collect::<String>().into_bytes())
    }
}

impl Text for Vec<char> {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        self.as_slice().utf8()
    }
}

impl Text for Cow<'_, str> {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }
}

impl<T: Text + ?Sized> Text for &T {
    #[inline]
    fn utf8(&self) -> Cow<'_, [u8]> {
        (**self).utf8()
    }
}
