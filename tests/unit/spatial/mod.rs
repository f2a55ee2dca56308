mod array2d;
