use crate::refs::{ObjectReferences, RefType};
use crate::ComposeError;
use image::DynamicImage;
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Pdf};
use std::path::Path;

/// A raster image held in memory until the document is written. The pixel
/// dimensions are captured at load time so layout can compute a fit without
/// touching the file again.
pub struct Image {
    image: DynamicImage,
    /// Source width in pixels
    pub width: u32,
    /// Source height in pixels
    pub height: u32,
}

impl Image {
    pub fn new(image: DynamicImage) -> Image {
        let width = image.width();
        let height = image.height();
        Image {
            image,
            width,
            height,
        }
    }

    /// Read and decode an image file
    pub fn load_from_disk<P: AsRef<Path>>(path: P) -> Result<Image, ComposeError> {
        let data = std::fs::read(path)?;
        Ok(Image::new(image::load_from_memory(&data)?))
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, image_index: usize, writer: &mut Pdf) {
        let level = CompressionLevel::DefaultLevel as u8;

        let mask = self.image.color().has_alpha().then(|| {
            use image::GenericImageView;
            let alphas: Vec<u8> = self.image.pixels().map(|p| (p.2).0[3]).collect();
            compress_to_vec_zlib(&alphas, level)
        });
        let samples = compress_to_vec_zlib(self.image.to_rgb8().as_raw(), level);

        let id = refs.gen(RefType::Image(image_index));
        let mut xobject = writer.image_xobject(id, samples.as_slice());
        xobject.filter(Filter::FlateDecode);
        xobject.width(self.width as i32);
        xobject.height(self.height as i32);
        xobject.color_space().device_rgb();
        xobject.bits_per_component(8);

        let mask_id = mask
            .as_ref()
            .map(|_| refs.gen(RefType::ImageMask(image_index)));
        if let Some(mask_id) = mask_id {
            xobject.s_mask(mask_id);
        }
        xobject.finish();

        if let (Some(mask_id), Some(mask)) = (mask_id, mask) {
            let mut s_mask = writer.image_xobject(mask_id, mask.as_slice());
            s_mask.filter(Filter::FlateDecode);
            s_mask.width(self.width as i32);
            s_mask.height(self.height as i32);
            s_mask.color_space().device_gray();
            s_mask.bits_per_component(8);
        }
    }
}
